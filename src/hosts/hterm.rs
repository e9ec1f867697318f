//! hterm / Secure Shell preference script
//!
//! hterm hosts take themes as a series of preference writes:
//!
//! ```text
//! t.prefs_.set('color-palette-overrides', ["#45475a", ...]);
//! t.prefs_.set('foreground-color', "#cdd6f4");
//! ```

use crate::sink::{PrefKey, PrefValue, PreferenceSink, SinkError};
use crate::theme::{ThemeDescriptor, ThemeError};

/// Object the generated script calls `set` on
pub const DEFAULT_RECEIVER: &str = "t.prefs_";

/// Sink that turns each preference write into one line of script.
#[derive(Debug, Clone)]
pub struct HtermScript {
    receiver: String,
    lines: Vec<String>,
}

impl HtermScript {
    pub fn new() -> Self {
        Self::with_receiver(DEFAULT_RECEIVER)
    }

    pub fn with_receiver(receiver: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_script(self) -> String {
        let mut script = self.lines.join("\n");
        script.push('\n');
        script
    }
}

impl Default for HtermScript {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceSink for HtermScript {
    fn set(&mut self, key: PrefKey, value: PrefValue<'_>) -> Result<(), SinkError> {
        // JSON string/array literals are valid JS literals
        self.lines.push(format!(
            "{}.set('{}', {});",
            self.receiver,
            key.as_str(),
            value.to_json()
        ));
        Ok(())
    }
}

/// Render the full hterm preference script for a theme
pub fn render_hterm(theme: &ThemeDescriptor) -> Result<String, ThemeError> {
    render_hterm_with_receiver(theme, DEFAULT_RECEIVER)
}

/// Same as [`render_hterm`], calling `set` on `receiver` instead of `t.prefs_`
pub fn render_hterm_with_receiver(
    theme: &ThemeDescriptor,
    receiver: &str,
) -> Result<String, ThemeError> {
    let mut script = HtermScript::with_receiver(receiver);
    theme.apply(Some(&mut script))?;
    Ok(format!("// {} theme for hterm\n{}", theme.name(), script.into_script()))
}
