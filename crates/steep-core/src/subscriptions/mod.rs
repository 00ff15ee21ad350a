//! Built-in subscription sources.
//!
//! - **Timers** ([`Every`], [`After`]) -- repeating and one-shot delays.
//! - **Keyboard** ([`key_presses`]) -- decoded key presses from the terminal,
//!   used by the runtime as its input collaborator.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
