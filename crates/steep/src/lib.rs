//! **steep** -- a Bubble Tea-inspired terminal runtime built on a
//! message-driven update loop.
//!
//! This umbrella crate re-exports everything needed to write a steep program
//! from a single dependency:
//!
//! * All public items from [`steep_core`] at the crate root ([`Model`],
//!   [`Command`], [`Subscription`], [`Program`], [`run`], [`run_with`], ...).
//! * The [`widgets`] module re-exports [`steep_widgets`] (progress bar,
//!   checkbox, easing curves).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use steep::{Command, KeyPress, Model};
//!
//! struct Hello;
//!
//! struct Msg(KeyPress);
//!
//! impl From<KeyPress> for Msg {
//!     fn from(key: KeyPress) -> Self {
//!         Msg(key)
//!     }
//! }
//!
//! impl Model for Hello {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         (Hello, Command::none())
//!     }
//!     fn update(self, msg: Msg) -> (Self, Command<Msg>) {
//!         match msg.0.as_str() {
//!             "q" => (self, Command::quit()),
//!             _ => (self, Command::none()),
//!         }
//!     }
//!     fn view(&self) -> String {
//!         "Hello, steep! (q to quit)".into()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     steep::run::<Hello>(()).await.unwrap();
//! }
//! ```

pub use steep_core::*;
pub mod widgets {
    pub use steep_widgets::*;
}

// Re-export dependencies for downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
