//! The substitution routine.

use crate::sink::Sink;
use crate::source::{RamTemplate, StorageReader, StorageTemplate, Stop, TemplateSource};
use crate::values::{Digit, Values};

/// What a placeholder prints when its slot in [`Values`] is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingValue {
    /// Print nothing.
    #[default]
    Empty,

    /// Print the placeholder itself, e.g. `%3`.
    Keep,
}

/// Prints templates with `%0`–`%9` placeholders into a [`Sink`].
///
/// - `%0` .. `%9` print the matching entry of the value table, verbatim.
/// - `%%` prints a single `%`.
/// - `%` followed by anything else prints both characters unchanged.
/// - A `%` at the very end of the template is dropped.
///
/// Nothing is allocated; literal text and values go straight to the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplatePrinter {
    missing: MissingValue,
}

/// Scanner position relative to the last `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Copying text that is not a `%`.
    Literal,
    /// A `%` was just consumed; the next byte decides what it means.
    AfterPercent,
    /// The template is exhausted or ended on a lone `%`.
    Terminated,
}

impl TemplatePrinter {
    pub const fn new() -> Self {
        Self {
            missing: MissingValue::Empty,
        }
    }

    /// Sets what placeholders with an empty slot print.
    pub fn missing_value(mut self, behavior: MissingValue) -> Self {
        self.missing = behavior;
        self
    }

    /// Prints a template held in ordinary memory.
    ///
    /// Literal runs reach the sink as single [`Sink::write_bytes`] calls.
    /// Returns the number of bytes written.
    pub fn print_to<S: Sink + ?Sized>(
        &self,
        sink: &mut S,
        template: &str,
        values: &Values<'_>,
    ) -> Result<usize, S::Error> {
        self.print_source_to(sink, RamTemplate::new(template), values)
    }

    /// Prints a zero-terminated template read a byte at a time from storage.
    ///
    /// Output is identical to [`print_to`](Self::print_to) for the same
    /// template text.
    pub fn print_storage_to<S: Sink + ?Sized, R: StorageReader>(
        &self,
        sink: &mut S,
        template: R,
        values: &Values<'_>,
    ) -> Result<usize, S::Error> {
        self.print_source_to(sink, StorageTemplate::new(template), values)
    }

    /// Prints from any [`TemplateSource`].
    pub fn print_source_to<S: Sink + ?Sized, T: TemplateSource>(
        &self,
        sink: &mut S,
        mut source: T,
        values: &Values<'_>,
    ) -> Result<usize, S::Error> {
        let mut written = 0;
        let mut state = State::Literal;

        loop {
            state = match state {
                State::Literal => {
                    let (n, stop) = source.copy_literal(sink)?;
                    written += n;
                    match stop {
                        Stop::Percent => State::AfterPercent,
                        Stop::End => State::Terminated,
                    }
                }
                State::AfterPercent => match source.next_byte() {
                    Some(next) => {
                        written += self.emit_escape(sink, next, values)?;
                        State::Literal
                    }
                    None => {
                        log::trace!("template ends with a lone '%'; dropped");
                        State::Terminated
                    }
                },
                State::Terminated => return Ok(written),
            };
        }
    }

    /// Renders into a freshly allocated `String`.
    ///
    /// The output is always valid UTF-8: the template and every value are
    /// `str`, the `%` handling never splits what follows it, and the
    /// template is only cut at a zero byte, which is a character of its own.
    ///
    /// Meant for hosts and tests; on a device prefer [`print_to`](Self::print_to).
    #[cfg(feature = "alloc")]
    pub fn render(&self, template: &str, values: &Values<'_>) -> alloc::string::String {
        use alloc::string::String;

        let mut out = alloc::vec::Vec::with_capacity(template.len());
        match self.print_to(&mut out, template, values) {
            Ok(_) => {}
            Err(never) => match never {},
        }
        // Never lossy in practice, see above.
        String::from_utf8(out)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }

    /// Handles the byte following a `%`.
    fn emit_escape<S: Sink + ?Sized>(
        &self,
        sink: &mut S,
        next: u8,
        values: &Values<'_>,
    ) -> Result<usize, S::Error> {
        if next == b'%' {
            sink.write_byte(b'%')?;
            return Ok(1);
        }

        match Digit::from_ascii(next) {
            Some(digit) => self.emit_value(sink, digit, values),
            None => {
                log::trace!("'%' followed by {:?}; printed literally", char::from(next));
                sink.write_bytes(&[b'%', next])?;
                Ok(2)
            }
        }
    }

    fn emit_value<S: Sink + ?Sized>(
        &self,
        sink: &mut S,
        digit: Digit,
        values: &Values<'_>,
    ) -> Result<usize, S::Error> {
        if let Some(value) = values.get(digit) {
            sink.write_str(value)?;
            return Ok(value.len());
        }

        log::trace!("placeholder %{} has no value", digit.get());
        match self.missing {
            MissingValue::Empty => Ok(0),
            MissingValue::Keep => {
                sink.write_bytes(&[b'%', digit.to_ascii()])?;
                Ok(2)
            }
        }
    }
}
