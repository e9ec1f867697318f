// 16-color ANSI palette
//
// Slot order is fixed: the 8 base colors followed by their bright variants,
// matching the index order terminals use for SGR 30-37 / 90-97.

use super::{ColorValue, ThemeError};

/// One of the 16 standard ANSI color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnsiSlot {
    // Standard ANSI colors (0-7)
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,

    // Bright variants (8-15)
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiSlot {
    /// All slots in index order
    pub const ALL: [AnsiSlot; 16] = [
        AnsiSlot::Black,
        AnsiSlot::Red,
        AnsiSlot::Green,
        AnsiSlot::Yellow,
        AnsiSlot::Blue,
        AnsiSlot::Magenta,
        AnsiSlot::Cyan,
        AnsiSlot::White,
        AnsiSlot::BrightBlack,
        AnsiSlot::BrightRed,
        AnsiSlot::BrightGreen,
        AnsiSlot::BrightYellow,
        AnsiSlot::BrightBlue,
        AnsiSlot::BrightMagenta,
        AnsiSlot::BrightCyan,
        AnsiSlot::BrightWhite,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// snake_case name used in error messages and `show` output
    pub fn name(self) -> &'static str {
        match self {
            AnsiSlot::Black => "black",
            AnsiSlot::Red => "red",
            AnsiSlot::Green => "green",
            AnsiSlot::Yellow => "yellow",
            AnsiSlot::Blue => "blue",
            AnsiSlot::Magenta => "magenta",
            AnsiSlot::Cyan => "cyan",
            AnsiSlot::White => "white",
            AnsiSlot::BrightBlack => "bright_black",
            AnsiSlot::BrightRed => "bright_red",
            AnsiSlot::BrightGreen => "bright_green",
            AnsiSlot::BrightYellow => "bright_yellow",
            AnsiSlot::BrightBlue => "bright_blue",
            AnsiSlot::BrightMagenta => "bright_magenta",
            AnsiSlot::BrightCyan => "bright_cyan",
            AnsiSlot::BrightWhite => "bright_white",
        }
    }

    /// Global variable name Blink Shell reads for this slot
    pub fn blink_name(self) -> &'static str {
        match self {
            AnsiSlot::Black => "black",
            AnsiSlot::Red => "red",
            AnsiSlot::Green => "green",
            AnsiSlot::Yellow => "yellow",
            AnsiSlot::Blue => "blue",
            AnsiSlot::Magenta => "magenta",
            AnsiSlot::Cyan => "cyan",
            AnsiSlot::White => "white",
            AnsiSlot::BrightBlack => "lightBlack",
            AnsiSlot::BrightRed => "lightRed",
            AnsiSlot::BrightGreen => "lightGreen",
            AnsiSlot::BrightYellow => "lightYellow",
            AnsiSlot::BrightBlue => "lightBlue",
            AnsiSlot::BrightMagenta => "lightMagenta",
            AnsiSlot::BrightCyan => "lightCyan",
            AnsiSlot::BrightWhite => "lightWhite",
        }
    }

    /// Key used by the VHS / iTerm2-Color-Schemes JSON format ("purple" for magenta)
    pub fn vhs_name(self) -> &'static str {
        match self {
            AnsiSlot::Black => "black",
            AnsiSlot::Red => "red",
            AnsiSlot::Green => "green",
            AnsiSlot::Yellow => "yellow",
            AnsiSlot::Blue => "blue",
            AnsiSlot::Magenta => "purple",
            AnsiSlot::Cyan => "cyan",
            AnsiSlot::White => "white",
            AnsiSlot::BrightBlack => "brightBlack",
            AnsiSlot::BrightRed => "brightRed",
            AnsiSlot::BrightGreen => "brightGreen",
            AnsiSlot::BrightYellow => "brightYellow",
            AnsiSlot::BrightBlue => "brightBlue",
            AnsiSlot::BrightMagenta => "brightPurple",
            AnsiSlot::BrightCyan => "brightCyan",
            AnsiSlot::BrightWhite => "brightWhite",
        }
    }

    pub fn is_bright(self) -> bool {
        self.index() >= 8
    }
}

/// Exactly 16 validated colors in ANSI slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [ColorValue; 16],
}

impl Palette {
    /// Validate 16 literals, in slot order.
    pub fn from_literals<S: AsRef<str>>(literals: &[S]) -> Result<Self, ThemeError> {
        if literals.len() != AnsiSlot::ALL.len() {
            return Err(ThemeError::InvalidPaletteLength {
                found: literals.len(),
            });
        }

        let colors = literals
            .iter()
            .zip(AnsiSlot::ALL)
            .map(|(literal, slot)| ColorValue::parse(slot.name(), literal.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_colors(colors)
    }

    pub fn from_colors(colors: Vec<ColorValue>) -> Result<Self, ThemeError> {
        let colors: [ColorValue; 16] = colors
            .try_into()
            .map_err(|rest: Vec<ColorValue>| ThemeError::InvalidPaletteLength { found: rest.len() })?;
        Ok(Self { colors })
    }

    pub fn get(&self, slot: AnsiSlot) -> &ColorValue {
        &self.colors[slot.index()]
    }

    pub fn as_slice(&self) -> &[ColorValue] {
        &self.colors
    }

    /// (slot, color) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (AnsiSlot, &ColorValue)> {
        AnsiSlot::ALL.into_iter().zip(self.colors.iter())
    }
}
