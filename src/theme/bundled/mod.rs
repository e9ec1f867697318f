//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/termtheme/themes/ on first run.
//! Users can then modify them freely.

pub(crate) mod catppuccin_latte;
pub(crate) mod catppuccin_mocha;

pub use catppuccin_latte::THEME as CATPPUCCIN_LATTE;
pub use catppuccin_mocha::THEME as CATPPUCCIN_MOCHA;

/// Bundled theme: display name, filename, and TOML content
pub struct BundledTheme {
    pub name: &'static str,
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        name: "Catppuccin Mocha",
        filename: "Catppuccin_Mocha.toml",
        content: CATPPUCCIN_MOCHA,
    },
    BundledTheme {
        name: "Catppuccin Latte",
        filename: "Catppuccin_Latte.toml",
        content: CATPPUCCIN_LATTE,
    },
];

/// Find a bundled theme by display name or filename stem, ignoring case
pub fn find(name: &str) -> Option<&'static BundledTheme> {
    let filename = format!("{}.toml", name.replace(' ', "_"));
    BUNDLED_THEMES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name) || t.filename.eq_ignore_ascii_case(&filename))
}
