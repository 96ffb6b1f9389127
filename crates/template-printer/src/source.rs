//! Where template bytes come from.
//!
//! The printer runs one algorithm over a [`TemplateSource`]. Two adapters
//! are provided: [`RamTemplate`] for templates in ordinary memory, which
//! hands literal runs to the sink in one write, and [`StorageTemplate`]
//! for templates that can only be fetched a byte at a time through a
//! [`StorageReader`] (firmware flash, EEPROM, memory-mapped ROM).

use crate::sink::Sink;

/// Why [`TemplateSource::copy_literal`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// A `%` was consumed.
    Percent,
    /// The template is exhausted.
    End,
}

/// A forward-only cursor over a template.
pub trait TemplateSource {
    /// The next byte, or `None` at the terminating zero or the end of input.
    fn next_byte(&mut self) -> Option<u8>;

    /// Copies bytes up to the next `%` into `sink` and consumes the `%`.
    ///
    /// Returns the number of bytes written and why copying stopped. The
    /// default pulls one byte at a time; sources with contiguous storage
    /// override it to write the whole run at once.
    fn copy_literal<S: Sink + ?Sized>(&mut self, sink: &mut S) -> Result<(usize, Stop), S::Error> {
        let mut written = 0;
        while let Some(byte) = self.next_byte() {
            if byte == b'%' {
                return Ok((written, Stop::Percent));
            }
            sink.write_byte(byte)?;
            written += 1;
        }
        Ok((written, Stop::End))
    }
}

/// A template held in addressable memory.
///
/// A zero byte ends the template early, the same way it ends a
/// [`StorageTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamTemplate<'t> {
    rest: &'t [u8],
}

impl<'t> RamTemplate<'t> {
    pub fn new(template: &'t str) -> Self {
        Self::from_bytes(template.as_bytes())
    }

    pub fn from_bytes(template: &'t [u8]) -> Self {
        let end = template
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(template.len());
        Self {
            rest: &template[..end],
        }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'t [u8] {
        self.rest
    }
}

impl TemplateSource for RamTemplate<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        let (&byte, rest) = self.rest.split_first()?;
        self.rest = rest;
        Some(byte)
    }

    fn copy_literal<S: Sink + ?Sized>(&mut self, sink: &mut S) -> Result<(usize, Stop), S::Error> {
        let bytes = self.rest;
        let (run, stop, rest) = match bytes.iter().position(|&byte| byte == b'%') {
            Some(pos) => (&bytes[..pos], Stop::Percent, &bytes[pos + 1..]),
            None => (bytes, Stop::End, &bytes[bytes.len()..]),
        };
        if !run.is_empty() {
            sink.write_bytes(run)?;
        }
        self.rest = rest;
        Ok((run.len(), stop))
    }
}

/// Byte-at-a-time access to read-only storage.
///
/// `read_byte(offset)` returns the byte at `offset`. A zero byte terminates
/// the template.
pub trait StorageReader {
    fn read_byte(&self, offset: usize) -> u8;
}

/// Reading past the end of a slice yields the terminator.
impl StorageReader for [u8] {
    fn read_byte(&self, offset: usize) -> u8 {
        self.get(offset).copied().unwrap_or(0)
    }
}

impl<R: StorageReader + ?Sized> StorageReader for &R {
    fn read_byte(&self, offset: usize) -> u8 {
        (**self).read_byte(offset)
    }
}

/// Wraps a read primitive such as a `pgm_read_byte` binding.
///
/// ```rust
/// use template_printer::{FnReader, StorageReader};
///
/// static FLASH: [u8; 4] = *b"%0!\0";
/// let reader = FnReader(|offset: usize| FLASH[offset]);
/// assert_eq!(reader.read_byte(2), b'!');
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnReader<F>(pub F);

impl<F: Fn(usize) -> u8> StorageReader for FnReader<F> {
    fn read_byte(&self, offset: usize) -> u8 {
        (self.0)(offset)
    }
}

/// A zero-terminated template living in read-only storage.
#[derive(Debug, Clone)]
pub struct StorageTemplate<R> {
    reader: R,
    offset: usize,
    done: bool,
}

impl<R: StorageReader> StorageTemplate<R> {
    pub fn new(reader: R) -> Self {
        Self::at(reader, 0)
    }

    /// A template starting `offset` bytes into the storage `reader` covers.
    pub fn at(reader: R, offset: usize) -> Self {
        Self {
            reader,
            offset,
            done: false,
        }
    }
}

impl<R: StorageReader> TemplateSource for StorageTemplate<R> {
    fn next_byte(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }
        match self.reader.read_byte(self.offset) {
            0 => {
                self.done = true;
                None
            }
            byte => {
                self.offset += 1;
                Some(byte)
            }
        }
    }
}
