use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt;

/// A decoded key press, identified by a short token such as `"j"`, `"down"`,
/// `"enter"`, `"esc"` or `"ctrl+c"`.
///
/// `KeyPress` is what the runtime's input collaborator hands to your model.
/// Your message type opts in by implementing `From<KeyPress>`:
///
/// ```rust
/// use steep_core::KeyPress;
///
/// enum Msg {
///     Key(String),
/// }
///
/// impl From<KeyPress> for Msg {
///     fn from(key: KeyPress) -> Self {
///         Msg::Key(key.into_string())
///     }
/// }
///
/// let Msg::Key(k) = Msg::from(KeyPress::new("down"));
/// assert_eq!(k, "down");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPress(String);

impl KeyPress {
    /// Wrap an already-decoded key token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The key token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key press, returning the token.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyPress {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl TryFrom<&KeyEvent> for KeyPress {
    type Error = ();

    fn try_from(event: &KeyEvent) -> Result<Self, ()> {
        key_token(event).map(KeyPress).ok_or(())
    }
}

/// Decode a crossterm key event into a key token.
///
/// Only presses (and repeats) produce tokens; releases and keys without a
/// token return `None`.  Control chords are spelled `ctrl+<key>`, alt chords
/// `alt+<key>`.
pub fn key_token(event: &KeyEvent) -> Option<String> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let base = match event.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => {
            if event.modifiers.contains(KeyModifiers::CONTROL) {
                c.to_ascii_lowercase().to_string()
            } else {
                c.to_string()
            }
        }
        KeyCode::Enter => "enter".into(),
        KeyCode::Esc => "esc".into(),
        KeyCode::Tab => "tab".into(),
        KeyCode::BackTab => "shift+tab".into(),
        KeyCode::Backspace => "backspace".into(),
        KeyCode::Delete => "delete".into(),
        KeyCode::Up => "up".into(),
        KeyCode::Down => "down".into(),
        KeyCode::Left => "left".into(),
        KeyCode::Right => "right".into(),
        KeyCode::Home => "home".into(),
        KeyCode::End => "end".into(),
        KeyCode::PageUp => "pgup".into(),
        KeyCode::PageDown => "pgdown".into(),
        KeyCode::Insert => "insert".into(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    let mut token = String::new();
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        token.push_str("ctrl+");
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        token.push_str("alt+");
    }
    token.push_str(&base);
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_characters() {
        assert_eq!(
            key_token(&press(KeyCode::Char('j'), KeyModifiers::NONE)).as_deref(),
            Some("j")
        );
        assert_eq!(
            key_token(&press(KeyCode::Char('Q'), KeyModifiers::SHIFT)).as_deref(),
            Some("Q")
        );
    }

    #[test]
    fn named_keys() {
        assert_eq!(
            key_token(&press(KeyCode::Down, KeyModifiers::NONE)).as_deref(),
            Some("down")
        );
        assert_eq!(
            key_token(&press(KeyCode::Enter, KeyModifiers::NONE)).as_deref(),
            Some("enter")
        );
        assert_eq!(
            key_token(&press(KeyCode::Esc, KeyModifiers::NONE)).as_deref(),
            Some("esc")
        );
        assert_eq!(
            key_token(&press(KeyCode::Char(' '), KeyModifiers::NONE)).as_deref(),
            Some("space")
        );
    }

    #[test]
    fn control_chords() {
        assert_eq!(
            key_token(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)).as_deref(),
            Some("ctrl+c")
        );
        assert_eq!(
            key_token(&press(KeyCode::Char('C'), KeyModifiers::CONTROL)).as_deref(),
            Some("ctrl+c")
        );
    }

    #[test]
    fn releases_are_dropped() {
        let mut event = press(KeyCode::Char('q'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(key_token(&event), None);
    }

    #[test]
    fn key_press_from_event() {
        let event = press(KeyCode::Up, KeyModifiers::NONE);
        let key = KeyPress::try_from(&event).unwrap();
        assert_eq!(key.as_str(), "up");
        assert_eq!(key.to_string(), "up");
    }
}
