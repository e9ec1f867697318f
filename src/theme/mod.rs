// Theme system
//
// Architecture:
// - ColorValue: a validated color literal (#RRGGBB or rgba(r,g,b,a))
// - Palette: the 16 ANSI slots in fixed order
// - ThemeDescriptor: immutable palette + special colors, applied to a host sink
// - ThemeFile: flat TOML document the descriptor is persisted as
//
// Theme loading priority (see catalog):
// 1. User themes from ~/.config/termtheme/themes/*.toml
// 2. Bundled themes (compiled in, extracted on first run)

mod bundled;
mod catalog;
mod color;
mod error;
mod palette;
mod toml_format;

pub use bundled::{BundledTheme, BUNDLED_THEMES};
pub use catalog::Catalog;
pub use color::{ColorSyntax, ColorValue};
pub use error::ThemeError;
pub use palette::{AnsiSlot, Palette};
pub use toml_format::{ThemeFile, FORMAT_VERSION};

use crate::sink::{PrefKey, PrefValue, PreferenceSink};

/// Name used when a theme is built without one
pub const UNTITLED: &str = "Untitled";

/// A complete terminal color theme.
///
/// Built once, never mutated. Every color has already passed the literal
/// syntax check by the time a descriptor exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
    name: String,
    palette: Palette,
    foreground: ColorValue,
    background: ColorValue,
    cursor: ColorValue,
    selection: Option<ColorValue>,
}

impl ThemeDescriptor {
    /// Build a theme from color literals.
    ///
    /// `palette` must hold exactly 16 entries in ANSI slot order. `selection`
    /// is optional since not every host has a selection color.
    pub fn new<S: AsRef<str>>(
        name: impl Into<String>,
        palette: &[S],
        foreground: &str,
        background: &str,
        cursor: &str,
        selection: Option<&str>,
    ) -> Result<Self, ThemeError> {
        let palette = Palette::from_literals(palette)?;

        Ok(Self {
            name: name.into(),
            palette,
            foreground: ColorValue::parse("foreground", foreground)?,
            background: ColorValue::parse("background", background)?,
            cursor: ColorValue::parse("cursor", cursor)?,
            selection: selection
                .map(|s| ColorValue::parse("selection", s))
                .transpose()?,
        })
    }

    /// Assemble from already validated parts
    pub fn from_parts(
        name: impl Into<String>,
        palette: Palette,
        foreground: ColorValue,
        background: ColorValue,
        cursor: ColorValue,
        selection: Option<ColorValue>,
    ) -> Self {
        Self {
            name: name.into(),
            palette,
            foreground,
            background,
            cursor,
            selection,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn color(&self, slot: AnsiSlot) -> &ColorValue {
        self.palette.get(slot)
    }

    pub fn foreground(&self) -> &ColorValue {
        &self.foreground
    }

    pub fn background(&self) -> &ColorValue {
        &self.background
    }

    pub fn cursor(&self) -> &ColorValue {
        &self.cursor
    }

    pub fn selection(&self) -> Option<&ColorValue> {
        self.selection.as_ref()
    }

    /// Write this theme into a host preference sink.
    ///
    /// `None` means the host never handed us a preference store. Writes go
    /// out palette first, then foreground, background, cursor, and selection
    /// when the theme has one. Applying twice leaves a key-overwriting sink in
    /// the same state as applying once.
    pub fn apply<S: PreferenceSink + ?Sized>(&self, sink: Option<&mut S>) -> Result<(), ThemeError> {
        let sink = sink.ok_or(ThemeError::SinkUnavailable)?;

        tracing::debug!(theme = %self.name, "applying theme to preference sink");

        sink.set(
            PrefKey::PaletteOverrides,
            PrefValue::Colors(self.palette.as_slice()),
        )?;
        sink.set(PrefKey::Foreground, PrefValue::Color(&self.foreground))?;
        sink.set(PrefKey::Background, PrefValue::Color(&self.background))?;
        sink.set(PrefKey::Cursor, PrefValue::Color(&self.cursor))?;
        if let Some(selection) = &self.selection {
            sink.set(PrefKey::Selection, PrefValue::Color(selection))?;
        }

        Ok(())
    }
}

impl Default for ThemeDescriptor {
    /// Catppuccin Mocha, the flagship bundled theme
    fn default() -> Self {
        bundled::catppuccin_mocha::descriptor()
    }
}
