//! "What to do today?": a small steep program.
//!
//! The first screen offers four tasks and counts down; if nothing is picked
//! before the countdown runs out, the program quits.  Picking a task switches
//! to a second screen with an animated download bar.
//!
//! Two clocks feed the loop: a countdown tick and a faster animation frame.
//! Both run the whole time and [`update`] decides which one matters in the
//! current [`Phase`].

pub mod message;
pub mod model;
pub mod settings;
pub mod update;
pub mod view;

pub use message::Msg;
pub use model::{Phase, Views, CHOICES, NUM_CHOICES};
pub use settings::Settings;
pub use update::update;
pub use view::view;
