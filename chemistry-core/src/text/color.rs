use std::fmt;
use std::str::FromStr;

use colored::{ColoredString, Colorize};

/// A 24 bit color, also used as the tint of potion items.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub struct RGBColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RGBColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        RGBColor { red, green, blue }
    }

    pub const fn from_rgb(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hex color must be in the format '#RRGGBB', got '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for RGBColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6)
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        let rgb = u32::from_str_radix(hex, 16).map_err(|_| ParseColorError(s.to_string()))?;
        Ok(Self::from_rgb(rgb))
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Named Minecraft color
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum NamedColor {
    Black = 0,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    pub fn console_color(self, text: &str) -> ColoredString {
        match self {
            NamedColor::Black => text.black(),
            NamedColor::DarkBlue => text.blue(),
            NamedColor::DarkGreen => text.green(),
            NamedColor::DarkAqua => text.cyan(),
            NamedColor::DarkRed => text.red(),
            NamedColor::DarkPurple => text.purple(),
            NamedColor::Gold => text.yellow(),
            NamedColor::Gray => text.bright_black(),
            NamedColor::DarkGray => text.bright_black(), // ?
            NamedColor::Blue => text.bright_blue(),
            NamedColor::Green => text.bright_green(),
            NamedColor::Aqua => text.cyan(),
            NamedColor::Red => text.red(),
            NamedColor::LightPurple => text.bright_purple(),
            NamedColor::Yellow => text.bright_yellow(),
            NamedColor::White => text.white(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color() {
        let color: RGBColor = "#7EB2CA".parse().unwrap();
        assert_eq!(color, RGBColor::new(126, 178, 202));
        assert_eq!(color.to_string(), "#7EB2CA");
        assert_eq!(RGBColor::from_rgb(0x7EB2CA), color);
    }

    #[test]
    fn reject_malformed_hex() {
        assert!("7EB2CA".parse::<RGBColor>().is_err());
        assert!("#7EB2C".parse::<RGBColor>().is_err());
        assert!("#GGGGGG".parse::<RGBColor>().is_err());
    }
}
