use core::fmt::{self, Write};

use heapless::String;
use math::resistance::Resistance;

use crate::{color::Color, ColorCodeError};

pub const BAND_COUNT: usize = 3;

/// Output capacity that fits every three-band label.
///
/// The longest one is "99000000 kiloohms".
pub const DEFAULT_CAPACITY: usize = 32;

/// A three-band code: two significant digits and a power-of-ten multiplier.
#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResistorCode {
    first: Color,
    second: Color,
    multiplier: Color,
}

impl ResistorCode {
    pub fn new(first: Color, second: Color, multiplier: Color) -> Self {
        Self {
            first,
            second,
            multiplier,
        }
    }

    /// Parses exactly three band names, in order.
    ///
    /// The band count is checked before any name is looked up. Names are
    /// then resolved left to right and the first unknown one aborts.
    pub fn from_names(names: &[&str]) -> Result<Self, ColorCodeError> {
        if names.len() != BAND_COUNT {
            return Err(ColorCodeError::InvalidBandCount(names.len()));
        }
        let first = names[0].parse()?;
        let second = names[1].parse()?;
        let multiplier = names[2].parse()?;
        Ok(Self::new(first, second, multiplier))
    }

    pub fn get_first(&self) -> Color {
        self.first
    }

    pub fn get_second(&self) -> Color {
        self.second
    }

    pub fn get_multiplier(&self) -> Color {
        self.multiplier
    }

    /// The two significant digits read as one number, brown-red is 12.
    pub fn significant(&self) -> u64 {
        10 * u64::from(self.first.value()) + u64::from(self.second.value())
    }

    pub fn resistance(&self) -> Resistance {
        // at most 99 * 10^9, no overflow possible
        let scale = 10u64.pow(u32::from(self.multiplier.value()));
        Resistance::from_ohm(self.significant() * scale)
    }
}

impl TryFrom<&[&str]> for ResistorCode {
    type Error = ColorCodeError;

    fn try_from(value: &[&str]) -> Result<Self, Self::Error> {
        Self::from_names(value)
    }
}

impl TryFrom<[&str; BAND_COUNT]> for ResistorCode {
    type Error = ColorCodeError;

    fn try_from(value: [&str; BAND_COUNT]) -> Result<Self, Self::Error> {
        Self::from_names(&value)
    }
}

impl fmt::Display for ResistorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resistance())
    }
}

/// Decodes three band names into a label such as "47 kiloohms".
///
/// Fails with [`ColorCodeError::InvalidColor`] on the first unknown band,
/// with [`ColorCodeError::InvalidBandCount`] unless exactly three names are
/// given, and with [`ColorCodeError::Overflow`] if the label does not fit
/// in `N` bytes.
pub fn decode<const N: usize>(colors: &[&str]) -> Result<String<N>, ColorCodeError> {
    let code = match ResistorCode::from_names(colors) {
        Ok(code) => code,
        Err(e) => {
            #[cfg(feature = "defmt-log")]
            defmt::warn!("rejected color bands: {}", e);
            return Err(e);
        }
    };

    #[cfg(feature = "defmt-log")]
    defmt::debug!("decoded {} as {}", code, code.resistance());

    let mut label = String::new();
    write!(label, "{}", code).map_err(|_| ColorCodeError::Overflow)?;
    Ok(label)
}

pub fn decode_default(colors: &[&str]) -> Result<String<DEFAULT_CAPACITY>, ColorCodeError> {
    decode(colors)
}
