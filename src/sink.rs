//! Host preference sinks
//!
//! A sink is whatever the host terminal exposes for writing settings. The theme
//! only ever talks to it through [`PreferenceSink::set`] with one of five fixed
//! keys, so hosts can be swapped without touching color data.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::theme::ColorValue;

/// The preference keys a theme writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrefKey {
    PaletteOverrides,
    Foreground,
    Background,
    Cursor,
    Selection,
}

impl PrefKey {
    pub const ALL: [PrefKey; 5] = [
        PrefKey::PaletteOverrides,
        PrefKey::Foreground,
        PrefKey::Background,
        PrefKey::Cursor,
        PrefKey::Selection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaletteOverrides => "color-palette-overrides",
            Self::Foreground => "foreground-color",
            Self::Background => "background-color",
            Self::Cursor => "cursor-color",
            Self::Selection => "selection-color",
        }
    }
}

impl fmt::Display for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value handed to a sink: one color or an ordered color list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefValue<'a> {
    Color(&'a ColorValue),
    Colors(&'a [ColorValue]),
}

impl PrefValue<'_> {
    pub fn to_owned_value(&self) -> OwnedPrefValue {
        match self {
            PrefValue::Color(c) => OwnedPrefValue::Color((*c).clone()),
            PrefValue::Colors(cs) => OwnedPrefValue::Colors(cs.to_vec()),
        }
    }

    /// JSON form hosts expect: a string, or an array of strings
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            PrefValue::Color(c) => serde_json::Value::String(c.as_str().to_string()),
            PrefValue::Colors(cs) => serde_json::Value::Array(
                cs.iter()
                    .map(|c| serde_json::Value::String(c.as_str().to_string()))
                    .collect(),
            ),
        }
    }
}

/// Owned copy of a [`PrefValue`], for sinks that keep what they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedPrefValue {
    Color(ColorValue),
    Colors(Vec<ColorValue>),
}

impl OwnedPrefValue {
    pub fn as_color(&self) -> Option<&ColorValue> {
        match self {
            OwnedPrefValue::Color(c) => Some(c),
            OwnedPrefValue::Colors(_) => None,
        }
    }

    pub fn as_colors(&self) -> Option<&[ColorValue]> {
        match self {
            OwnedPrefValue::Color(_) => None,
            OwnedPrefValue::Colors(cs) => Some(cs),
        }
    }
}

/// A sink refused a write
#[derive(Error, Debug)]
#[error("{key}: {reason}")]
pub struct SinkError {
    pub key: PrefKey,
    pub reason: String,
}

/// Host capability for writing terminal preferences.
pub trait PreferenceSink {
    fn set(&mut self, key: PrefKey, value: PrefValue<'_>) -> Result<(), SinkError>;
}

impl<S: PreferenceSink + ?Sized> PreferenceSink for &mut S {
    fn set(&mut self, key: PrefKey, value: PrefValue<'_>) -> Result<(), SinkError> {
        (**self).set(key, value)
    }
}

/// In-memory sink. Later writes to a key replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    prefs: BTreeMap<PrefKey, OwnedPrefValue>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: PrefKey) -> Option<&OwnedPrefValue> {
        self.prefs.get(&key)
    }

    pub fn len(&self) -> usize {
        self.prefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PrefKey, &OwnedPrefValue)> {
        self.prefs.iter()
    }
}

impl PreferenceSink for RecordingSink {
    fn set(&mut self, key: PrefKey, value: PrefValue<'_>) -> Result<(), SinkError> {
        self.prefs.insert(key, value.to_owned_value());
        Ok(())
    }
}
