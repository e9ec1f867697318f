// Theme lookup by name
//
// Resolution order:
// 1. <themes_dir>/<name>.toml
// 2. <themes_dir>/<name with spaces as underscores>.toml
// 3. Bundled themes (case-insensitive)

use std::path::PathBuf;

use super::bundled::{self, BUNDLED_THEMES};
use super::{ThemeDescriptor, ThemeError, ThemeFile};

/// Marker written once bundled themes have been copied out
const EXTRACTED_MARKER: &str = ".extracted_v1";

/// Where themes come from: an optional user directory plus the bundled set.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    themes_dir: Option<PathBuf>,
}

impl Catalog {
    pub fn new(themes_dir: Option<PathBuf>) -> Self {
        Self { themes_dir }
    }

    /// Get themes directory path
    /// Uses Unix-style ~/.config on all platforms, like the config file
    pub fn default_themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("termtheme").join("themes"))
    }

    /// Load a theme by name.
    ///
    /// A user file that exists but fails to parse or validate is an error, not
    /// a reason to fall through to the bundled copy.
    pub fn load(&self, name: &str) -> Result<ThemeDescriptor, ThemeError> {
        if let Some(path) = self.user_theme_path(name) {
            tracing::debug!(path = %path.display(), "loading user theme");
            let contents = std::fs::read_to_string(&path).map_err(|source| ThemeError::Io {
                path: path.clone(),
                source,
            })?;
            return ThemeFile::parse(&contents, &path.display().to_string())?.into_descriptor();
        }

        if let Some(theme) = bundled::find(name) {
            tracing::debug!(filename = theme.filename, "loading bundled theme");
            return ThemeFile::parse(theme.content, theme.filename)?.into_descriptor();
        }

        Err(ThemeError::ThemeNotFound {
            name: name.to_string(),
        })
    }

    fn user_theme_path(&self, name: &str) -> Option<PathBuf> {
        let dir = self.themes_dir.as_ref()?;

        let exact = dir.join(format!("{}.toml", name));
        if exact.is_file() {
            return Some(exact);
        }

        // Try with spaces replaced by underscores
        let normalized = dir.join(format!("{}.toml", name.replace(' ', "_")));
        normalized.is_file().then_some(normalized)
    }

    /// List all available themes (bundled + user), bundled first
    pub fn list_available(&self) -> Vec<String> {
        let mut themes: Vec<String> = BUNDLED_THEMES.iter().map(|t| t.name.to_string()).collect();

        let Some(dir) = &self.themes_dir else {
            return themes;
        };
        let Ok(entries) = std::fs::read_dir(dir) else {
            return themes;
        };

        let mut user: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| {
                path.file_stem()
                    // Convert filename format (underscore) to display format (space)
                    .map(|stem| stem.to_string_lossy().replace('_', " "))
            })
            .collect();
        user.sort();

        for name in user {
            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&name)) {
                themes.push(name);
            }
        }

        themes
    }

    /// Copy bundled themes into the user directory once.
    ///
    /// Existing files are never overwritten so user edits survive.
    pub fn ensure_extracted(&self) -> std::io::Result<()> {
        let Some(dir) = &self.themes_dir else {
            return Ok(());
        };

        std::fs::create_dir_all(dir)?;

        let marker = dir.join(EXTRACTED_MARKER);
        if marker.exists() {
            return Ok(());
        }

        for theme in BUNDLED_THEMES {
            let path = dir.join(theme.filename);
            if !path.exists() {
                std::fs::write(&path, theme.content)?;
                tracing::debug!(path = %path.display(), "extracted bundled theme");
            }
        }

        std::fs::write(&marker, "1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::AnsiSlot;
    use std::path::Path;

    fn write_theme(dir: &Path, filename: &str, name: &str, black: &str) {
        let content = super::super::bundled::CATPPUCCIN_MOCHA
            .replace("name = \"Catppuccin Mocha\"", &format!("name = {:?}", name))
            .replace("color0 = \"#45475a\"", &format!("color0 = {:?}", black));
        std::fs::write(dir.join(filename), content).unwrap();
    }

    #[test]
    fn test_load_bundled_without_user_dir() {
        let catalog = Catalog::new(None);
        let theme = catalog.load("Catppuccin Mocha").unwrap();
        assert_eq!(theme.name(), "Catppuccin Mocha");

        let theme = catalog.load("catppuccin latte").unwrap();
        assert_eq!(theme.name(), "Catppuccin Latte");
    }

    #[test]
    fn test_unknown_theme() {
        let err = Catalog::new(None).load("Nope").unwrap_err();
        assert!(matches!(err, ThemeError::ThemeNotFound { name } if name == "Nope"));
    }

    #[test]
    fn test_user_theme_shadows_bundled() {
        let dir = tempfile::tempdir().unwrap();
        write_theme(dir.path(), "Catppuccin_Mocha.toml", "My Mocha", "#000000");

        let theme = Catalog::new(Some(dir.path().to_path_buf()))
            .load("Catppuccin Mocha")
            .unwrap();
        assert_eq!(theme.name(), "My Mocha");
        assert_eq!(theme.color(AnsiSlot::Black).as_str(), "#000000");
    }

    #[test]
    fn test_broken_user_theme_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_theme(dir.path(), "Broken.toml", "Broken", "black");

        let err = Catalog::new(Some(dir.path().to_path_buf()))
            .load("Broken")
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColorFormat { .. }));
    }

    #[test]
    fn test_list_available_merges_user_themes() {
        let dir = tempfile::tempdir().unwrap();
        write_theme(dir.path(), "Night_Owl.toml", "Night Owl", "#011627");
        write_theme(dir.path(), "Catppuccin_Mocha.toml", "Catppuccin Mocha", "#45475a");
        std::fs::write(dir.path().join("notes.txt"), "not a theme").unwrap();

        let names = Catalog::new(Some(dir.path().to_path_buf())).list_available();
        assert_eq!(names, ["Catppuccin Mocha", "Catppuccin Latte", "Night Owl"]);
    }

    #[test]
    fn test_extraction_preserves_user_edits() {
        let dir = tempfile::tempdir().unwrap();
        let themes_dir = dir.path().join("themes");
        std::fs::create_dir_all(&themes_dir).unwrap();
        write_theme(&themes_dir, "Catppuccin_Mocha.toml", "Edited", "#123456");

        let catalog = Catalog::new(Some(themes_dir.clone()));
        catalog.ensure_extracted().unwrap();

        assert!(themes_dir.join("Catppuccin_Latte.toml").is_file());
        assert!(themes_dir.join(EXTRACTED_MARKER).is_file());
        assert_eq!(catalog.load("Catppuccin Mocha").unwrap().name(), "Edited");

        // Marker present: a deleted theme is not restored
        std::fs::remove_file(themes_dir.join("Catppuccin_Latte.toml")).unwrap();
        catalog.ensure_extracted().unwrap();
        assert!(!themes_dir.join("Catppuccin_Latte.toml").exists());
    }
}
