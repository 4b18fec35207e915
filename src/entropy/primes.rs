/// Largest primes below 2^64 .. 2^56, used as state multipliers.
pub const PRIMES: [u64; 9] = [
    0xFFFF_FFFF_FFFF_FFC5, // 2^64 - 59
    0x7FFF_FFFF_FFFF_FFE7, // 2^63 - 25
    0x3FFF_FFFF_FFFF_FFC7, // 2^62 - 57
    0x1FFF_FFFF_FFFF_FFFF, // 2^61 - 1
    0x0FFF_FFFF_FFFF_FFA3, // 2^60 - 93
    0x07FF_FFFF_FFFF_FFC9, // 2^59 - 55
    0x03FF_FFFF_FFFF_FFE5, // 2^58 - 27
    0x01FF_FFFF_FFFF_FFF3, // 2^57 - 13
    0x00FF_FFFF_FFFF_FFFB, // 2^56 - 5
];
