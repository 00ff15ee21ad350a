//! Core runtime for **steep**, a message-driven update loop for terminal
//! programs.
//!
//! A steep program is a [`Model`] plus three pure functions: `init` builds
//! the first state, `update` turns *(state, message)* into *(state, command)*
//! and `view` turns a state into text.  The [`Program`] driver owns the one
//! current state and feeds it messages from every producer (the keyboard and
//! any number of timer [`Subscription`]s) through a single channel, so
//! `update` never races with itself.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Application trait (init / update / view / subscriptions) |
//! | [`Command`] | What the driver should do after an update: nothing, quit, or send a message |
//! | [`Subscription`] | Long-lived message producer (timers, keyboard) |
//! | [`KeyPress`] | A decoded key token such as `"down"` or `"ctrl+c"` |
//! | [`Renderer`] | Where rendered text goes ([`TerminalRenderer`] by default) |
//! | [`Program`] | The driver: merges producers, runs the loop, cancels on quit |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! # Loop
//!
//! 1. **init** -- [`Model::init`] creates the initial state.
//! 2. **view** -- the initial state is rendered.
//! 3. **merge** -- producers send messages into one channel; each producer's
//!    own messages stay in order, otherwise arrival order wins.
//! 4. **update** -- [`Model::update`] consumes the state and one message and
//!    returns the next state plus a [`Command`].
//! 5. **view** -- the new state is rendered.
//! 6. **repeat** until a command quits; then every producer is cancelled.

pub mod command;
pub mod event;
pub mod model;
pub mod render;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use event::{key_token, KeyPress};
pub use model::Model;
pub use render::{OutputTarget, Renderer, TerminalRenderer};
pub use runtime::{log_to_file, Program, ProgramError, ProgramHandle, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{key_presses, After, Every};

/// Run a steep program on the terminal with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags).run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options).run().await
}
