use crate::command::Command;
use crate::event::KeyPress;
use crate::subscription::Subscription;

/// The top-level application trait, following the [Elm Architecture].
///
/// Every steep program implements `Model`. The runtime drives a continuous
/// **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`].
/// 2. [`view`](Model::view) renders the current state to text.
/// 3. Messages arrive from the keyboard (as [`KeyPress`]) and from
///    [`Subscription`]s.
/// 4. [`update`](Model::update) consumes the current model together with one
///    message and returns the next model plus a [`Command`].
/// 5. Steps 2--4 repeat until a [`Command::quit()`] is returned.
///
/// `update` takes the model by value: the runtime owns exactly one model and
/// swaps it for the returned one after every message, so the transition is
/// an ordinary pure function and never runs concurrently with itself.
///
/// # Example
///
/// ```rust
/// use steep_core::{Command, KeyPress, Model};
///
/// struct Counter {
///     count: i32,
/// }
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
/// impl Model for Counter {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_flags: ()) -> (Self, Command<Msg>) {
///         (Counter { count: 0 }, Command::none())
///     }
///
///     fn update(mut self, msg: Msg) -> (Self, Command<Msg>) {
///         match msg {
///             Msg::Key(k) if k == "q" => return (self, Command::quit()),
///             Msg::Key(k) if k == "+" => self.count += 1,
///             Msg::Key(_) => {}
///         }
///         (self, Command::none())
///     }
///
///     fn view(&self) -> String {
///         format!("Count: {}", self.count)
///     }
/// }
/// ```
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    ///
    /// Key presses reach the model through the `From<KeyPress>` conversion;
    /// everything else arrives from [`Subscription`]s or from
    /// [`Command::message`].
    type Message: From<KeyPress> + Send + 'static;

    /// Initialization data passed to [`Model::init`].
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Consume the current state and one message, returning the next state
    /// and a command for the runtime.
    fn update(self, msg: Self::Message) -> (Self, Command<Self::Message>);

    /// Render the current state as plain text.  Called after every update and
    /// once before the first message.
    fn view(&self) -> String;

    /// Declare active subscriptions.  Called after every update.
    ///
    /// The runtime diffs the returned list against the running set by
    /// [`SubscriptionId`](crate::SubscriptionId): new subscriptions are
    /// started, missing ones are cancelled and unchanged ones keep running.
    ///
    /// The default implementation returns an empty list.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
