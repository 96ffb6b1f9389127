#![cfg(feature = "alloc")]

use std::fmt::Write as _;

#[cfg(feature = "std")]
use template_printer::IoSink;
use template_printer::{
    print_storage_to, print_to, render, FmtSink, FnReader, MissingValue, Sink, StackBuffer,
    TemplatePrinter, Values,
};

const GREETING: &str = "Hello, %0. I want to play a game. Would you like to play \"%1\" with me?";

fn greeting_values() -> Values<'static> {
    Values::try_from(&["Dave", "TicTacToe"][..]).unwrap()
}

/// Sink that counts calls, standing in for a serial port.
#[derive(Default)]
struct SerialPort {
    bytes: Vec<u8>,
    byte_writes: usize,
    run_writes: usize,
}

impl Sink for SerialPort {
    type Error = std::convert::Infallible;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.byte_writes += 1;
        self.bytes.push(byte);
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.run_writes += 1;
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }
}

#[test]
fn test_greeting_across_sinks() {
    let expected =
        "Hello, Dave. I want to play a game. Would you like to play \"TicTacToe\" with me?";
    let values = greeting_values();

    // Vec
    let mut out: Vec<u8> = Vec::new();
    let n = print_to(&mut out, GREETING, &values).unwrap();
    assert_eq!(out, expected.as_bytes());
    assert_eq!(n, expected.len());

    // Stack buffer
    let mut buf = StackBuffer::<128>::new();
    print_to(&mut buf, GREETING, &values).unwrap();
    assert_eq!(buf.as_str(), Some(expected));

    // fmt::Write
    let mut sink = FmtSink::new(String::new());
    print_to(&mut sink, GREETING, &values).unwrap();
    assert_eq!(sink.finish().unwrap(), expected);

    // String
    assert_eq!(render(GREETING, &values), expected);
}

#[cfg(feature = "std")]
#[test]
fn test_greeting_to_io_writer() {
    let mut sink = IoSink::new(Vec::<u8>::new());
    print_to(&mut sink, GREETING, &greeting_values()).unwrap();
    assert_eq!(
        sink.into_inner(),
        b"Hello, Dave. I want to play a game. Would you like to play \"TicTacToe\" with me?"
    );
}

#[test]
fn test_flash_template_matches_ram() {
    static FLASH_GREETING: &[u8] =
        b"Hello, %0. I want to play a game. Would you like to play \"%1\" with me?\0";
    let values = greeting_values();

    let mut from_ram: Vec<u8> = Vec::new();
    print_to(&mut from_ram, GREETING, &values).unwrap();

    let mut from_flash: Vec<u8> = Vec::new();
    print_storage_to(&mut from_flash, FLASH_GREETING, &values).unwrap();

    assert_eq!(from_ram, from_flash);
}

#[test]
fn test_flash_read_primitive() {
    // Several zero-terminated strings packed in one flash region.
    static FLASH: &[u8] = b"temp=%0C\0hum=%1%%\0";

    let reads = std::cell::Cell::new(0usize);
    let reader = FnReader(|offset: usize| {
        reads.set(reads.get() + 1);
        FLASH[offset]
    });
    let values = Values::try_from(&["21", "40"][..]).unwrap();

    let mut out: Vec<u8> = Vec::new();
    print_storage_to(&mut out, &reader, &values).unwrap();
    assert_eq!(out, b"temp=21C");
    // Eight bytes plus the terminator.
    assert_eq!(reads.get(), 9);

    let mut out: Vec<u8> = Vec::new();
    TemplatePrinter::new()
        .print_source_to(
            &mut out,
            template_printer::StorageTemplate::at(&reader, 9),
            &values,
        )
        .unwrap();
    assert_eq!(out, b"hum=40%");
}

#[test]
fn test_ram_batches_literals_and_flash_does_not() {
    let values = Values::try_from(&["Dave"][..]).unwrap();

    let mut port = SerialPort::default();
    print_to(&mut port, "Hi %0, bye", &values).unwrap();
    assert_eq!(port.bytes, b"Hi Dave, bye");
    // "Hi ", "Dave", ", bye"
    assert_eq!(port.run_writes, 3);
    assert_eq!(port.byte_writes, 0);

    let mut port = SerialPort::default();
    print_storage_to(&mut port, &b"Hi %0, bye\0"[..], &values).unwrap();
    assert_eq!(port.bytes, b"Hi Dave, bye");
    // only the value arrives as a run
    assert_eq!(port.run_writes, 1);
    assert_eq!(port.byte_writes, 8);
}

#[test]
fn test_malformed_sequences_degrade() {
    let values = Values::new().with(2, "").unwrap();

    assert_eq!(render("Score: %Q%%", &values), "Score: %Q%");
    assert_eq!(render("%2 done%", &values), " done");
    assert_eq!(render("%", &values), "");
    assert_eq!(render("100% sure", &values), "100% sure");
}

#[test]
fn test_missing_value_behaviors() {
    let values = Values::try_from(&["set"][..]).unwrap();

    let silent = TemplatePrinter::new();
    assert_eq!(silent.render("%0/%1", &values), "set/");

    let visible = TemplatePrinter::new().missing_value(MissingValue::Keep);
    assert_eq!(visible.render("%0/%1", &values), "set/%1");
}

#[test]
fn test_printer_composes_with_fmt_write() {
    // Mixing regular formatting and template printing on the same writer.
    let mut line = String::new();
    write!(line, "[{:>3}] ", 7).unwrap();

    let values = Values::try_from(&["boot"][..]).unwrap();
    let mut sink = FmtSink::new(line);
    print_to(&mut sink, "stage %0 ok", &values).unwrap();

    assert_eq!(sink.finish().unwrap(), "[  7] stage boot ok");
}
