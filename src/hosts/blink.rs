//! Blink Shell theme script
//!
//! Blink reads a theme as bare global assignments, one per color, rather than
//! through a preference store.

use crate::theme::{AnsiSlot, ThemeDescriptor};

/// Render the Blink Shell theme script for a theme.
///
/// Layout: base colors, bright (`light*`) colors, then the terminal colors,
/// each group with its names padded to a common width.
pub fn render_blink(theme: &ThemeDescriptor) -> String {
    let mut out = String::new();
    out.push_str(&format!("// {} theme for Blink Shell\n", theme.name()));
    out.push_str("// Import this in Blink Shell: Settings -> Appearance -> Themes -> Add Theme\n");

    let (base, bright): (Vec<AnsiSlot>, Vec<AnsiSlot>) =
        AnsiSlot::ALL.into_iter().partition(|slot| !slot.is_bright());

    for group in [base, bright] {
        let assignments: Vec<(&str, &str)> = group
            .iter()
            .map(|&slot| (slot.blink_name(), theme.color(slot).as_str()))
            .collect();
        out.push('\n');
        push_aligned(&mut out, &assignments);
    }

    let mut terminal = vec![
        ("foregroundColor", theme.foreground().as_str()),
        ("backgroundColor", theme.background().as_str()),
        ("cursorColor", theme.cursor().as_str()),
    ];
    if let Some(selection) = theme.selection() {
        terminal.push(("selectionColor", selection.as_str()));
    }
    out.push('\n');
    push_aligned(&mut out, &terminal);

    out
}

fn push_aligned(out: &mut String, assignments: &[(&str, &str)]) {
    let width = assignments.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, value) in assignments {
        out.push_str(&format!("{:<width$} = '{}';\n", name, value, width = width));
    }
}
