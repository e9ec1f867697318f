// TOML theme format
//
// The persisted form of a ThemeDescriptor: a flat document with the 16
// palette entries keyed by index plus the four named colors.
//
// Format version: 1

use serde::Deserialize;
use std::collections::BTreeMap;

use super::{AnsiSlot, ColorValue, Palette, ThemeDescriptor, ThemeError, UNTITLED};

/// Current theme document version
pub const FORMAT_VERSION: u32 = 1;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeFile {
    pub meta: ThemeMeta,
    pub colors: ColorsSection,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    #[serde(default)]
    pub name: Option<String>,
    pub version: u32,
    #[serde(default)]
    pub author: Option<String>,
}

/// Flat color table: color0..color15 plus the named colors
#[derive(Debug, Clone, Deserialize)]
pub struct ColorsSection {
    pub foreground: String,
    pub background: String,
    pub cursor: String,
    #[serde(default)]
    pub selection: Option<String>,
    /// Everything else; palette entries are picked out by `colorN` key
    #[serde(flatten)]
    pub indexed: BTreeMap<String, String>,
}

impl ThemeFile {
    /// Parse a TOML theme document. `origin` names it in errors.
    pub fn parse(content: &str, origin: &str) -> Result<Self, ThemeError> {
        toml::from_str(content).map_err(|source| ThemeError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        Self::parse(content, "<string>")
    }

    /// Snapshot a descriptor as a document
    pub fn from_descriptor(theme: &ThemeDescriptor) -> Self {
        let indexed = theme
            .palette()
            .iter()
            .map(|(slot, color)| (format!("color{}", slot.index()), color.as_str().to_string()))
            .collect();

        Self {
            meta: ThemeMeta {
                name: Some(theme.name().to_string()),
                version: FORMAT_VERSION,
                author: None,
            },
            colors: ColorsSection {
                foreground: theme.foreground().as_str().to_string(),
                background: theme.background().as_str().to_string(),
                cursor: theme.cursor().as_str().to_string(),
                selection: theme.selection().map(|c| c.as_str().to_string()),
                indexed,
            },
        }
    }

    /// Validate every color and build the descriptor.
    pub fn into_descriptor(self) -> Result<ThemeDescriptor, ThemeError> {
        let ThemeFile { meta, colors } = self;
        if meta.version != FORMAT_VERSION {
            return Err(ThemeError::UnsupportedVersion(meta.version));
        }

        let mut slots: BTreeMap<usize, String> = BTreeMap::new();
        for (key, value) in colors.indexed {
            match palette_index(&key) {
                Some(index) => {
                    slots.insert(index, value);
                }
                None => tracing::warn!(key = %key, "ignoring unknown key in [colors]"),
            }
        }

        // Indices must be exactly 0..=15
        let complete = slots.len() == AnsiSlot::ALL.len()
            && slots.keys().copied().eq(0..AnsiSlot::ALL.len());
        if !complete {
            return Err(ThemeError::InvalidPaletteLength {
                found: slots.keys().filter(|&&i| i < AnsiSlot::ALL.len()).count(),
            });
        }

        let literals: Vec<String> = slots.into_values().collect();
        let palette = Palette::from_literals(literals.as_slice())?;

        Ok(ThemeDescriptor::from_parts(
            meta.name.unwrap_or_else(|| UNTITLED.to_string()),
            palette,
            ColorValue::parse("foreground", &colors.foreground)?,
            ColorValue::parse("background", &colors.background)?,
            ColorValue::parse("cursor", &colors.cursor)?,
            colors
                .selection
                .as_deref()
                .map(|s| ColorValue::parse("selection", s))
                .transpose()?,
        ))
    }

    /// Serialize back to TOML. Palette keys come out in index order.
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("[meta]\n");
        if let Some(name) = &self.meta.name {
            output.push_str(&format!("name = {}\n", quoted(name)));
        }
        output.push_str(&format!("version = {}\n", self.meta.version));
        if let Some(author) = &self.meta.author {
            output.push_str(&format!("author = {}\n", quoted(author)));
        }

        output.push_str("\n[colors]\n");
        for slot in AnsiSlot::ALL {
            let key = format!("color{}", slot.index());
            if let Some(value) = self.colors.indexed.get(&key) {
                output.push_str(&format!("{} = {}    # {}\n", key, quoted(value), slot.name()));
            }
        }
        output.push_str(&format!("foreground = {}\n", quoted(&self.colors.foreground)));
        output.push_str(&format!("background = {}\n", quoted(&self.colors.background)));
        output.push_str(&format!("cursor = {}\n", quoted(&self.colors.cursor)));
        if let Some(selection) = &self.colors.selection {
            output.push_str(&format!("selection = {}\n", quoted(selection)));
        }

        output
    }
}

/// Slot index for a `colorN` key. Only the canonical spelling counts, so
/// `color05` or `color+5` can't shadow `color5`.
fn palette_index(key: &str) -> Option<usize> {
    let index = key.strip_prefix("color")?.parse::<usize>().ok()?;
    (format!("color{}", index) == key).then_some(index)
}

/// A TOML basic string literal, escaped the way the toml crate writes them
fn quoted(value: &str) -> String {
    toml::Value::from(value).to_string()
}

impl ThemeDescriptor {
    /// Export as VHS / iTerm2-Color-Schemes JSON.
    ///
    /// VHS has no alpha and requires a selection color, so rgba literals are
    /// flattened to hex and a missing selection falls back to bright black.
    pub fn to_vhs_json(&self) -> String {
        let mut map = serde_json::Map::new();
        map.insert("name".to_string(), self.name().into());
        for (slot, color) in self.palette().iter() {
            map.insert(slot.vhs_name().to_string(), color.to_hex().into());
        }
        map.insert("background".to_string(), self.background().to_hex().into());
        map.insert("foreground".to_string(), self.foreground().to_hex().into());
        map.insert("cursor".to_string(), self.cursor().to_hex().into());
        let selection = self
            .selection()
            .unwrap_or_else(|| self.color(AnsiSlot::BrightBlack));
        map.insert("selection".to_string(), selection.to_hex().into());

        serde_json::Value::Object(map).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r##"
[meta]
name = "Test Theme"
version = 1

[colors]
color0 = "#45475a"
color1 = "#f38ba8"
color2 = "#a6e3a1"
color3 = "#f9e2af"
color4 = "#89b4fa"
color5 = "#f5c2e7"
color6 = "#94e2d5"
color7 = "#bac2de"
color8 = "#585b70"
color9 = "#f38ba8"
color10 = "#a6e3a1"
color11 = "#f9e2af"
color12 = "#89b4fa"
color13 = "#f5c2e7"
color14 = "#94e2d5"
color15 = "#a6adc8"
foreground = "#cdd6f4"
background = "#1e1e2e"
cursor = "#f5e0dc"
"##;

    #[test]
    fn test_parse_theme() {
        let file = ThemeFile::from_str(DOC).unwrap();
        assert_eq!(file.meta.name.as_deref(), Some("Test Theme"));
        assert_eq!(file.meta.version, 1);
        assert!(file.colors.selection.is_none());

        let theme = file.into_descriptor().unwrap();
        assert_eq!(theme.name(), "Test Theme");
        assert_eq!(theme.color(AnsiSlot::Black).as_str(), "#45475a");
        assert_eq!(theme.color(AnsiSlot::BrightBlue).as_str(), "#89b4fa");
        assert_eq!(theme.foreground().as_str(), "#cdd6f4");
        assert!(theme.selection().is_none());
    }

    #[test]
    fn test_missing_index_is_arity_error() {
        let doc = DOC.replace("color7 = \"#bac2de\"\n", "");
        let err = ThemeFile::from_str(&doc).unwrap().into_descriptor().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidPaletteLength { found: 15 }));
    }

    #[test]
    fn test_extra_index_is_arity_error() {
        let doc = DOC.replace("foreground =", "color16 = \"#000000\"\nforeground =");
        let err = ThemeFile::from_str(&doc).unwrap().into_descriptor().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidPaletteLength { .. }));
    }

    #[test]
    fn test_bad_color_in_document() {
        let doc = DOC.replace("color3 = \"#f9e2af\"", "color3 = \"yellow\"");
        let err = ThemeFile::from_str(&doc).unwrap().into_descriptor().unwrap_err();
        match err {
            ThemeError::InvalidColorFormat { field, .. } => assert_eq!(field, "yellow"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_version() {
        let doc = DOC.replace("version = 1", "version = 2");
        let err = ThemeFile::from_str(&doc).unwrap().into_descriptor().unwrap_err();
        assert!(matches!(err, ThemeError::UnsupportedVersion(2)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ThemeFile::parse("[meta\nname = ", "broken.toml").unwrap_err();
        match err {
            ThemeError::Parse { origin, .. } => assert_eq!(origin, "broken.toml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_document_reproduces_descriptor() {
        let theme = ThemeFile::from_str(DOC).unwrap().into_descriptor().unwrap();
        let text = ThemeFile::from_descriptor(&theme).to_toml();

        assert!(text.contains("color0 = \"#45475a\""));
        assert!(text.find("color2 =").unwrap() < text.find("color10 =").unwrap());

        let reparsed = ThemeFile::from_str(&text).unwrap().into_descriptor().unwrap();
        assert_eq!(reparsed, theme);
    }

    #[test]
    fn test_non_canonical_index_keys_are_ignored() {
        // color05 sits next to color5 and must not replace it
        let doc = DOC.replace("color5 = \"#f5c2e7\"", "color5 = \"#f5c2e7\"\ncolor05 = \"#000000\"");
        let theme = ThemeFile::from_str(&doc).unwrap().into_descriptor().unwrap();
        assert_eq!(theme.color(AnsiSlot::Magenta).as_str(), "#f5c2e7");

        // Alone, it doesn't stand in for slot 5 either
        for spelling in ["color05", "color+5"] {
            let doc = DOC.replace("color5 =", &format!("{} =", spelling));
            let err = ThemeFile::from_str(&doc).unwrap().into_descriptor().unwrap_err();
            assert!(matches!(err, ThemeError::InvalidPaletteLength { found: 15 }));
        }
    }

    #[test]
    fn test_export_escapes_names() {
        for name in ["Tab\u{7f}Theme", "Bell\u{7}", "Quote \"Q\" \\ Slash", "Caf\u{e9}\tNoir"] {
            let doc = DOC.replace("name = \"Test Theme\"", &format!("name = {}", quoted(name)));
            let theme = ThemeFile::from_str(&doc).unwrap().into_descriptor().unwrap();
            assert_eq!(theme.name(), name);

            let mut file = ThemeFile::from_descriptor(&theme);
            file.meta.author = Some(name.to_string());
            let text = file.to_toml();

            let reparsed = ThemeFile::from_str(&text)
                .unwrap_or_else(|e| panic!("export of {name:?} did not parse: {e}\n{text}"));
            assert_eq!(reparsed.meta.author.as_deref(), Some(name));
            assert_eq!(reparsed.into_descriptor().unwrap(), theme);
        }
    }

    #[test]
    fn test_vhs_json() {
        let theme = ThemeFile::from_str(DOC).unwrap().into_descriptor().unwrap();
        let json: serde_json::Value = serde_json::from_str(&theme.to_vhs_json()).unwrap();

        assert_eq!(json["name"], "Test Theme");
        assert_eq!(json["black"], "#45475a");
        assert_eq!(json["purple"], "#f5c2e7");
        assert_eq!(json["brightWhite"], "#a6adc8");
        // No selection in the document: bright black stands in
        assert_eq!(json["selection"], "#585b70");
    }
}
