//! Catppuccin Mocha - Soothing pastel dark theme

use crate::theme::{ThemeDescriptor, ThemeFile};

pub const THEME: &str = r##"# Catppuccin Mocha theme for termtheme
# Soothing pastel dark theme

[meta]
name = "Catppuccin Mocha"
version = 1
author = "Catppuccin"

[colors]
color0 = "#45475a"    # black
color1 = "#f38ba8"    # red
color2 = "#a6e3a1"    # green
color3 = "#f9e2af"    # yellow
color4 = "#89b4fa"    # blue
color5 = "#f5c2e7"    # magenta
color6 = "#94e2d5"    # cyan
color7 = "#bac2de"    # white
color8 = "#585b70"    # bright_black
color9 = "#f38ba8"    # bright_red
color10 = "#a6e3a1"   # bright_green
color11 = "#f9e2af"   # bright_yellow
color12 = "#89b4fa"   # bright_blue
color13 = "#f5c2e7"   # bright_magenta
color14 = "#94e2d5"   # bright_cyan
color15 = "#a6adc8"   # bright_white
foreground = "#cdd6f4"
background = "#1e1e2e"
cursor = "#f5e0dc"
selection = "#585b70"
"##;

/// The parsed theme; also what `ThemeDescriptor::default()` returns.
pub(crate) fn descriptor() -> ThemeDescriptor {
    ThemeFile::parse(THEME, "Catppuccin_Mocha.toml")
        .and_then(ThemeFile::into_descriptor)
        .expect("bundled Catppuccin Mocha theme is valid")
}
