//! Batch generation into stdout, a file, or an in-memory buffer.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use rand::Rng;
use zeroize::Zeroize;

use super::generate_password_with;
use super::requirements::PasswordRequirements;

const CAPACITY: usize = 8 * 1024;

/// Where a batch of passwords goes.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Stdout,
    /// Appended to, created along with its parent directories if needed.
    File(&'a Path),
    /// Collected and returned, e.g. for the clipboard.
    Buffer,
}

/// Buffered writer that zeroes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        self.buf.zeroize();
    }
}

/// Write `count` passwords to `out`, one per line.
pub fn write_batch<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    config: PasswordRequirements,
    count: usize,
    rng: &mut R,
) -> io::Result<()> {
    for _ in 0..count {
        let mut pass = generate_password_with(config, rng);
        pass.push('\n');
        let res = out.write_all(pass.as_bytes());
        pass.zeroize();
        res?;
    }
    out.flush()
}

/// Generate `count` passwords into `target`.
///
/// Returns the passwords, newline separated, only for [`Target::Buffer`].
pub fn generate_batch<R: Rng + ?Sized>(
    config: PasswordRequirements,
    count: usize,
    target: Target<'_>,
    rng: &mut R,
) -> io::Result<Option<String>> {
    match target {
        Target::Stdout => {
            let stdout = io::stdout();
            let mut out = SecureBufWriter::new(stdout.lock());
            write_batch(&mut out, config, count, rng)?;
            Ok(None)
        }
        Target::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut out = SecureBufWriter::new(file);
            write_batch(&mut out, config, count, rng)?;
            Ok(None)
        }
        Target::Buffer => {
            let mut passwords = String::new();
            for _ in 0..count {
                let mut pass = generate_password_with(config, rng);
                passwords.push_str(&pass);
                passwords.push('\n');
                pass.zeroize();
            }
            Ok(Some(passwords))
        }
    }
}
