use core::fmt;

// values strictly above this are reported in kiloohms
const KILOOHM_THRESHOLD: u64 = 1_000;

#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResistanceUnit {
    Ohm,
    Kiloohm,
}

impl ResistanceUnit {
    /// How many ohms make up one of this unit.
    pub fn ohms(&self) -> u64 {
        match self {
            ResistanceUnit::Ohm => 1,
            ResistanceUnit::Kiloohm => 1_000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResistanceUnit::Ohm => "ohms",
            ResistanceUnit::Kiloohm => "kiloohms",
        }
    }
}

impl fmt::Display for ResistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An exact resistance, stored as a whole number of ohms.
///
/// Unlike [`measurements::Resistance`] this never goes through a float, so
/// the printed magnitude is always the exact decimal value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Resistance {
    // ohm
    value: u64,
}

impl Resistance {
    pub fn from_ohm(value: u64) -> Self {
        Self { value }
    }

    pub fn as_ohm(&self) -> u64 {
        self.value
    }

    /// The unit this resistance is displayed in.
    ///
    /// Anything strictly above 1000 ohms is shown in kiloohms, so exactly
    /// 1000 ohms stays "1000 ohms".
    pub fn unit(&self) -> ResistanceUnit {
        if self.value > KILOOHM_THRESHOLD {
            ResistanceUnit::Kiloohm
        } else {
            ResistanceUnit::Ohm
        }
    }

    /// Splits the value into whole units and the remaining ohms.
    pub fn magnitude_in(&self, unit: ResistanceUnit) -> (u64, u64) {
        let divisor = unit.ohms();
        (self.value / divisor, self.value % divisor)
    }
}

fn write_magnitude(
    f: &mut fmt::Formatter<'_>,
    whole: u64,
    remainder: u64,
    unit: ResistanceUnit,
) -> fmt::Result {
    if remainder == 0 {
        return write!(f, "{}", whole);
    }

    // number of decimal places one unit spans, 3 for kiloohms
    let mut width: usize = 0;
    let mut scale = unit.ohms();
    while scale > 1 {
        scale /= 10;
        width += 1;
    }

    let mut fraction = remainder;
    while fraction % 10 == 0 {
        fraction /= 10;
        width -= 1;
    }
    write!(f, "{}.{:0width$}", whole, fraction, width = width)
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit();
        let (whole, remainder) = self.magnitude_in(unit);
        write_magnitude(f, whole, remainder, unit)?;
        write!(f, " {}", unit)
    }
}

impl From<Resistance> for measurements::Resistance {
    fn from(value: Resistance) -> Self {
        measurements::Resistance::from_ohms(value.as_ohm() as f64)
    }
}

#[cfg(feature = "defmt-log")]
impl defmt::Format for Resistance {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} ohm", self.as_ohm())
    }
}
