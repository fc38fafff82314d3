//! Human-readable summary renderer for change sets.

use crate::diff::model::ChangeSet;

/// Render a human-readable Markdown/text summary of a [`ChangeSet`].
///
/// Intended for review workflows and audit displays. Informational only;
/// it does not affect the structured change set.
pub fn render_change_summary(type_name: &str, changes: &ChangeSet) -> String {
    let mut out = String::new();

    out.push_str(&format!("## Field Changes: {type_name}\n\n"));

    if changes.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str(&format!("**Changed fields**: {}\n\n", changes.len()));
    for (field, change) in changes {
        out.push_str(&format!("- **{}**: `{}` -> `{}`\n", field, change.old, change.new));
    }

    out
}
