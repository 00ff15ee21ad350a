use steep::KeyPress;

/// Everything that can happen to [`Views`](crate::Views).
///
/// Each variant has a single producer: the keyboard, the countdown clock or
/// the animation clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A decoded key token such as `"j"`, `"down"` or `"ctrl+c"`.
    KeyPress(String),
    /// Countdown heartbeat.
    Tick,
    /// Animation clock.
    Frame,
}

impl Msg {
    /// Shorthand for `Msg::KeyPress(key.to_string())`.
    pub fn key(key: &str) -> Self {
        Msg::KeyPress(key.to_string())
    }
}

impl From<KeyPress> for Msg {
    fn from(key: KeyPress) -> Self {
        Msg::KeyPress(key.into_string())
    }
}
