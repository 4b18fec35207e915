//! Cycle-counter reads for [`HwRng`](super::HwRng).

/// What [`counter`] reads on this target.
#[cfg(target_arch = "x86_64")]
pub const COUNTER_NAME: &str = "rdtsc";
#[cfg(target_arch = "aarch64")]
pub const COUNTER_NAME: &str = "cntvct_el0";
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub const COUNTER_NAME: &str = "os";

/// Current value of the CPU cycle counter.
///
/// Targets without a readable counter get a word from the OS-seeded generator.
#[inline(always)]
pub fn counter() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        // SAFETY: rdtsc has no preconditions on x86_64.
        unsafe { core::arch::x86_64::_rdtsc() }
    }
    #[cfg(target_arch = "aarch64")]
    {
        let ticks: u64;
        // SAFETY: cntvct_el0 is readable from EL0 on every aarch64 OS we target.
        unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks, options(nomem, nostack)) };
        ticks
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        rand::random()
    }
}
