//! Per-host adapters
//!
//! One canonical ThemeDescriptor, rendered into whatever call shape each host
//! terminal expects:
//! - hterm / Secure Shell: `prefs.set(key, value)` writes
//! - Blink Shell: bare global assignments

mod blink;
mod hterm;

pub use blink::render_blink;
pub use hterm::{render_hterm, render_hterm_with_receiver, HtermScript, DEFAULT_RECEIVER};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::theme::{ThemeDescriptor, ThemeError};

/// Supported host terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Host {
    #[default]
    Hterm,
    Blink,
}

#[derive(Error, Debug)]
#[error("unknown host '{0}' (expected one of: hterm, secure-shell, blink)")]
pub struct UnknownHost(pub String);

impl Host {
    pub const ALL: [Host; 2] = [Host::Hterm, Host::Blink];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hterm => "hterm",
            Self::Blink => "blink",
        }
    }
}

impl FromStr for Host {
    type Err = UnknownHost;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hterm" | "secure-shell" | "secureshell" => Ok(Self::Hterm),
            "blink" | "blink-shell" => Ok(Self::Blink),
            _ => Err(UnknownHost(s.to_string())),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `theme` as the script `host` loads
pub fn render(host: Host, theme: &ThemeDescriptor) -> Result<String, ThemeError> {
    render_with_receiver(host, theme, DEFAULT_RECEIVER)
}

/// Render, with `receiver` as the hterm preference object. Blink ignores it.
pub fn render_with_receiver(
    host: Host,
    theme: &ThemeDescriptor,
    receiver: &str,
) -> Result<String, ThemeError> {
    tracing::debug!(host = %host, theme = theme.name(), "rendering theme");
    match host {
        Host::Hterm => render_hterm_with_receiver(theme, receiver),
        Host::Blink => Ok(render_blink(theme)),
    }
}
