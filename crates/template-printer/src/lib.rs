//! Allocation-free `%0`–`%9` placeholder printer.
//!
//! Building a message with `format!` or string concatenation creates
//! temporary heap strings, which fragments the heap on devices with a few
//! kilobytes of RAM. This crate writes a template straight into an output
//! [`Sink`] instead, substituting `%0` through `%9` with borrowed strings
//! as it goes.
//!
//! # Example
//!
//! ```rust
//! use template_printer::{print_to, StackBuffer, Values};
//!
//! let values = Values::try_from(&["Dave", "TicTacToe"][..]).unwrap();
//!
//! let mut out = StackBuffer::<96>::new();
//! print_to(
//!     &mut out,
//!     "Hello, %0. I want to play a game. Would you like to play \"%1\" with me?",
//!     &values,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     out.as_str(),
//!     Some("Hello, Dave. I want to play a game. Would you like to play \"TicTacToe\" with me?")
//! );
//! ```
//!
//! Templates kept in flash are read through a [`StorageReader`] and give the
//! same output:
//!
//! ```rust
//! use template_printer::{print_storage_to, StackBuffer, Values};
//!
//! static GREETING: &[u8] = b"Hello, %0!\0";
//!
//! let values = Values::new().with(0, "Dave").unwrap();
//! let mut buf = StackBuffer::<32>::new();
//! print_storage_to(&mut buf, GREETING, &values).unwrap();
//! assert_eq!(buf.as_str(), Some("Hello, Dave!"));
//! ```
//!
//! # Template Syntax
//!
//! | Sequence     | Output                                   |
//! |--------------|------------------------------------------|
//! | `%0` .. `%9` | the matching value, verbatim             |
//! | `%%`         | a single `%`                             |
//! | `%x`         | `%x` unchanged, for any other `x`        |
//! | trailing `%` | nothing                                  |
//!
//! A zero byte ends the template in both memory and storage. Values are
//! never scanned for placeholders. Placeholders whose slot is empty print
//! according to [`MissingValue`].
//!
//! # Features
//!
//! - `std` (default): [`IoSink`], and `std::error::Error` for the error types.
//! - `alloc`: `Vec<u8>` as a sink and [`render`]. Implied by `std`.
//!
//! Without either the crate is `no_std`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod printer;
mod sink;
mod source;
mod values;

pub use error::{BufferError, ValuesError};
pub use printer::{MissingValue, TemplatePrinter};
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::{FmtSink, Sink, StackBuffer};
pub use source::{FnReader, RamTemplate, StorageReader, StorageTemplate, Stop, TemplateSource};
pub use values::{Digit, Values, SLOTS};

/// Prints `template` into `sink`, replacing `%0`–`%9` with `values`.
///
/// Shorthand for [`TemplatePrinter::print_to`] with default settings.
pub fn print_to<S: Sink + ?Sized>(
    sink: &mut S,
    template: &str,
    values: &Values<'_>,
) -> Result<usize, S::Error> {
    TemplatePrinter::new().print_to(sink, template, values)
}

/// Prints a zero-terminated template from read-only storage into `sink`.
///
/// Shorthand for [`TemplatePrinter::print_storage_to`] with default settings.
pub fn print_storage_to<S: Sink + ?Sized, R: StorageReader>(
    sink: &mut S,
    template: R,
    values: &Values<'_>,
) -> Result<usize, S::Error> {
    TemplatePrinter::new().print_storage_to(sink, template, values)
}

/// Renders `template` into a new `String`.
#[cfg(feature = "alloc")]
pub fn render(template: &str, values: &Values<'_>) -> alloc::string::String {
    TemplatePrinter::new().render(template, values)
}
