// termtheme - terminal color themes for hterm and Blink Shell
//
// One canonical theme description, applied to whichever host terminal is
// asking for it:
// - theme: validated colors, the 16-slot ANSI palette, ThemeDescriptor
// - sink: the preference-store capability a host exposes
// - hosts: hterm (prefs.set calls) and Blink Shell (global assignments)
// - config / logging: ambient setup shared with the binary

pub mod config;
pub mod hosts;
pub mod logging;
pub mod sink;
pub mod theme;

pub use hosts::Host;
pub use sink::{PrefKey, PrefValue, PreferenceSink, RecordingSink};
pub use theme::{AnsiSlot, ColorValue, ThemeDescriptor, ThemeError};
