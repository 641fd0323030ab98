use core::{fmt, str::FromStr};

use crate::ColorCodeError;

/// A resistor band color. The discriminant is the digit the band encodes.
#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    Violet = 7,
    Grey = 8,
    White = 9,
}

impl Color {
    /// Every color, in digit order.
    pub const ALL: [Color; 10] = [
        Color::Black,
        Color::Brown,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::Grey,
        Color::White,
    ];

    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Violet => "violet",
            Color::Grey => "grey",
            Color::White => "white",
        }
    }
}

impl From<Color> for u8 {
    fn from(value: Color) -> Self {
        value.value()
    }
}

// names are matched exactly: lowercase, no surrounding whitespace
impl FromStr for Color {
    type Err = ColorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Color::Black),
            "brown" => Ok(Color::Brown),
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "violet" => Ok(Color::Violet),
            "grey" => Ok(Color::Grey),
            "white" => Ok(Color::White),
            _ => Err(ColorCodeError::InvalidColor),
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the digit a band color stands for.
pub fn color_code(name: &str) -> Result<u8, ColorCodeError> {
    name.parse::<Color>().map(u8::from)
}

#[cfg(test)]
mod tests {
    use super::{color_code, Color};
    use crate::ColorCodeError;

    #[test]
    fn test_color_code_table() {
        let expected = [
            ("black", 0),
            ("brown", 1),
            ("red", 2),
            ("orange", 3),
            ("yellow", 4),
            ("green", 5),
            ("blue", 6),
            ("violet", 7),
            ("grey", 8),
            ("white", 9),
        ];
        for (name, value) in expected {
            assert_eq!(color_code(name), Ok(value));
        }
    }

    #[test]
    fn test_invalid_color() {
        assert_eq!(color_code("pink"), Err(ColorCodeError::InvalidColor));
        assert_eq!(color_code(""), Err(ColorCodeError::InvalidColor));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!("Red".parse::<Color>(), Err(ColorCodeError::InvalidColor));
        assert_eq!("RED".parse::<Color>(), Err(ColorCodeError::InvalidColor));
        assert_eq!(" red".parse::<Color>(), Err(ColorCodeError::InvalidColor));
    }

    #[test]
    fn test_gray_spelling_rejected() {
        assert_eq!(Color::try_from("grey"), Ok(Color::Grey));
        assert_eq!(Color::try_from("gray"), Err(ColorCodeError::InvalidColor));
    }

    #[test]
    fn test_name_round_trip() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>(), Ok(color));
            assert_eq!(color.to_string(), color.name());
        }
    }

    #[test]
    fn test_from_value() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(usize::from(color.value()), i);
            assert_eq!(Color::from_value(color.value()), Some(*color));
        }
        assert_eq!(Color::from_value(10), None);
    }
}
