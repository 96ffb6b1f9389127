//! Output destinations the printer writes into.
//!
//! A [`Sink`] only has to accept bytes in order. The printer never seeks,
//! never reads back and never buffers on its own, so anything from a UART
//! to a growable buffer can sit behind it.

use core::fmt;

use crate::error::BufferError;

/// A sequential byte destination.
///
/// Only [`write_byte`](Sink::write_byte) is required. Sinks that can take a
/// whole run at once should override [`write_bytes`](Sink::write_bytes).
pub trait Sink {
    type Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_bytes(s.as_bytes())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        (**self).write_str(s)
    }
}

#[cfg(feature = "alloc")]
impl Sink for alloc::vec::Vec<u8> {
    type Error = core::convert::Infallible;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Fixed-capacity sink backed by an inline `[u8; N]`.
///
/// Writes that do not fit keep whatever prefix fits and then fail with
/// [`BufferError::Full`].
#[derive(Debug, Clone)]
pub struct StackBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> StackBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The contents as text, or `None` if a write stopped mid-character.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<const N: usize> Default for StackBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Sink for StackBuffer<N> {
    type Error = BufferError;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.len == N {
            return Err(BufferError::Full { capacity: N });
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let n = bytes.len().min(N - self.len);
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        if n < bytes.len() {
            return Err(BufferError::Full { capacity: N });
        }
        Ok(())
    }
}

/// Adapts any [`fmt::Write`] (a display driver, `heapless::String`, a
/// `String`) into a [`Sink`].
///
/// Bytes arriving one at a time are reassembled into characters before
/// they reach the writer. Invalid or truncated sequences come out as
/// U+FFFD.
#[derive(Debug)]
pub struct FmtSink<W> {
    inner: W,
    pending: [u8; 4],
    pending_len: usize,
}

impl<W: fmt::Write> FmtSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            pending: [0; 4],
            pending_len: 0,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flushes a dangling partial character as U+FFFD and returns the writer.
    pub fn finish(mut self) -> Result<W, fmt::Error> {
        self.flush_pending()?;
        Ok(self.inner)
    }

    fn flush_pending(&mut self) -> fmt::Result {
        if self.pending_len > 0 {
            self.pending_len = 0;
            self.inner.write_char(char::REPLACEMENT_CHARACTER)?;
        }
        Ok(())
    }

    /// Total length of the UTF-8 sequence `lead` starts, if it is a valid lead byte.
    fn sequence_len(lead: u8) -> Option<usize> {
        match lead {
            0xC2..=0xDF => Some(2),
            0xE0..=0xEF => Some(3),
            0xF0..=0xF4 => Some(4),
            _ => None,
        }
    }
}

impl<W: fmt::Write> Sink for FmtSink<W> {
    type Error = fmt::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.pending_len == 0 {
            if byte.is_ascii() {
                return self.inner.write_char(char::from(byte));
            }
            return match Self::sequence_len(byte) {
                Some(_) => {
                    self.pending[0] = byte;
                    self.pending_len = 1;
                    Ok(())
                }
                None => self.inner.write_char(char::REPLACEMENT_CHARACTER),
            };
        }

        if byte & 0xC0 != 0x80 {
            // Not a continuation byte: the pending sequence is cut short.
            self.flush_pending()?;
            return self.write_byte(byte);
        }

        self.pending[self.pending_len] = byte;
        self.pending_len += 1;

        let expected = Self::sequence_len(self.pending[0]).unwrap_or(1);
        if self.pending_len < expected {
            return Ok(());
        }

        let len = self.pending_len;
        self.pending_len = 0;
        match core::str::from_utf8(&self.pending[..len]) {
            Ok(s) => self.inner.write_str(s),
            Err(_) => self.inner.write_char(char::REPLACEMENT_CHARACTER),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.pending_len == 0 {
            if let Ok(s) = core::str::from_utf8(bytes) {
                return self.inner.write_str(s);
            }
        }
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.flush_pending()?;
        self.inner.write_str(s)
    }
}

/// Adapts any [`std::io::Write`] (a serial port, a file, stdout) into a [`Sink`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    type Error = std::io::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.inner.write_all(&[byte])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(bytes)
    }
}
