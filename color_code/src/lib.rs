#![cfg_attr(not(test), no_std)]

use core::fmt;

pub use math::measurements;
pub use math::resistance::{Resistance, ResistanceUnit};

pub mod color;
pub mod decoder;

pub use color::{color_code, Color};
pub use decoder::{decode, decode_default, ResistorCode, BAND_COUNT, DEFAULT_CAPACITY};

#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorCodeError {
    // band name outside the color table
    InvalidColor,
    InvalidBandCount(usize),
    // decoded label did not fit the output string
    Overflow,
}

impl fmt::Display for ColorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorCodeError::InvalidColor => f.write_str("Invalid Color"),
            ColorCodeError::InvalidBandCount(n) => {
                write!(f, "expected {} color bands, got {}", BAND_COUNT, n)
            }
            ColorCodeError::Overflow => f.write_str("output buffer too small"),
        }
    }
}
