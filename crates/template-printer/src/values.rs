//! The ten-slot value table that placeholders index into.

use crate::error::ValuesError;

/// Number of placeholder slots, `%0` through `%9`.
pub const SLOTS: usize = 10;

/// A placeholder index in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit from its numeric value. Returns `None` above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value < SLOTS as u8 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Decodes an ASCII `'0'..='9'` byte.
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_digit() {
            Some(Self(byte - b'0'))
        } else {
            None
        }
    }

    /// The numeric value, `0..=9`.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The ASCII character this digit is written as in a template.
    pub const fn to_ascii(self) -> u8 {
        b'0' + self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Borrowed strings substituted for `%0`–`%9`.
///
/// Slots the caller never fills are empty; what an empty slot prints is
/// decided by [`MissingValue`](crate::MissingValue).
///
/// ```rust
/// use template_printer::Values;
///
/// let values = Values::try_from(&["Dave", "TicTacToe"][..]).unwrap();
/// assert_eq!(values.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Values<'a> {
    slots: [Option<&'a str>; SLOTS],
}

impl<'a> Values<'a> {
    /// An empty table.
    pub const fn new() -> Self {
        Self {
            slots: [None; SLOTS],
        }
    }

    /// Fills slot `index`, replacing any previous value.
    pub fn set(&mut self, index: usize, value: &'a str) -> Result<(), ValuesError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ValuesError::IndexOutOfRange { index })?;
        *slot = Some(value);
        Ok(())
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, index: usize, value: &'a str) -> Result<Self, ValuesError> {
        self.set(index, value)?;
        Ok(self)
    }

    /// Empties slot `index`.
    pub fn clear(&mut self, index: usize) -> Result<(), ValuesError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ValuesError::IndexOutOfRange { index })?;
        *slot = None;
        Ok(())
    }

    /// The value in the slot for `digit`, if it was filled.
    pub fn get(&self, digit: Digit) -> Option<&'a str> {
        self.slots[digit.index()]
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl<'a> TryFrom<&[&'a str]> for Values<'a> {
    type Error = ValuesError;

    /// Fills slots `0..values.len()` in order.
    fn try_from(values: &[&'a str]) -> Result<Self, Self::Error> {
        if values.len() > SLOTS {
            return Err(ValuesError::TooMany {
                given: values.len(),
            });
        }

        let mut table = Self::new();
        for (slot, value) in table.slots.iter_mut().zip(values) {
            *slot = Some(*value);
        }
        Ok(table)
    }
}

impl<'a> From<[Option<&'a str>; SLOTS]> for Values<'a> {
    fn from(slots: [Option<&'a str>; SLOTS]) -> Self {
        Self { slots }
    }
}
