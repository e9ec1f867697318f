//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let themes_dir = match &self.themes_dir {
            Some(dir) => format!("themes_dir = {}", quoted(&dir.display().to_string())),
            None => "# themes_dir = \"~/.config/termtheme/themes\"".to_string(),
        };

        format!(
            r#"# termtheme configuration

# Theme: Catppuccin Mocha, Catppuccin Latte, or any <name>.toml in themes_dir
# List them with `termtheme list`
theme = {theme}

# Host terminal: hterm (Secure Shell) or blink
host = "{host}"

# Object the hterm script calls set() on
hterm_receiver = {receiver}

# Directory for user theme files
{themes_dir}

# Copy bundled themes into themes_dir on first run
extract_bundled = {extract}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
format = "{log_format}"  # pretty, json
"#,
            theme = quoted(&self.theme),
            host = self.host.as_str(),
            receiver = quoted(&self.hterm_receiver),
            themes_dir = themes_dir,
            extract = self.extract_bundled,
            log_level = quoted(&self.logging.level),
            log_format = self.logging.format.as_str(),
        )
    }
}

/// TOML string literal for a free-form value
fn quoted(value: &str) -> String {
    toml::Value::from(value).to_string()
}
