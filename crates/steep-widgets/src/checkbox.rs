//! Single-line checkbox.

/// Render `label` behind a checkbox: `[x] label` when checked, `[ ] label`
/// otherwise.
pub fn checkbox(label: &str, checked: bool) -> String {
    let mark = if checked { 'x' } else { ' ' };
    format!("[{mark}] {label}")
}
