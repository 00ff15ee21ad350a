//! Text widgets for the **steep** runtime.
//!
//! Views in steep are plain strings, so widgets here are pure functions and
//! small builders that return text.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`checkbox`] | `[x] label` / `[ ] label` lines |
//! | [`ease`] | Easing curves for animations |
//! | [`progress`] | Fixed-width text progress bar |

pub mod checkbox;
pub mod ease;
pub mod progress;

pub use checkbox::checkbox;
pub use ease::Easing;
pub use progress::{progressbar, ProgressBar};
