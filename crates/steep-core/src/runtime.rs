use crate::command::{Action, Command};
use crate::event::KeyPress;
use crate::model::Model;
use crate::render::{OutputTarget, Renderer, TerminalRenderer};
use crate::subscription::SubscriptionManager;
use crate::subscriptions::key_presses;
use std::sync::Arc;
use tokio::sync::{mpsc, Notify};
use tokio::task::AbortHandle;

/// Errors that can occur while starting or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The program was run outside a tokio runtime, so timers and input
    /// cannot be scheduled.
    #[error("no tokio runtime available to drive timers and input")]
    NoRuntime,
}

/// Configuration options for a [`Program`].
///
/// Use struct update syntax to override only what you need:
///
/// ```rust
/// use steep_core::{OutputTarget, ProgramOptions};
///
/// let opts = ProgramOptions {
///     alt_screen: false,
///     output: OutputTarget::Stderr,
///     ..ProgramOptions::default()
/// };
/// assert!(opts.capture_input);
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Render in the alternate screen (default: true).
    pub alt_screen: bool,
    /// Restore the terminal when a panic unwinds (default: true).
    pub catch_panics: bool,
    /// Quit on SIGINT delivered to the process (default: true).
    pub handle_signals: bool,
    /// Read key presses from the terminal (default: true).
    pub capture_input: bool,
    /// Output target: stdout (default) or stderr.
    pub output: OutputTarget,
    /// Terminal title.
    pub title: Option<String>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: true,
            catch_panics: true,
            handle_signals: true,
            capture_input: true,
            output: OutputTarget::default(),
            title: None,
        }
    }
}

impl ProgramOptions {
    /// Options for a program without a terminal: no keyboard, no signal
    /// handling.  Messages are injected through a [`ProgramHandle`].
    pub fn headless() -> Self {
        Self {
            handle_signals: false,
            capture_input: false,
            ..Self::default()
        }
    }
}

/// A cloneable handle to a running [`Program`].
///
/// * [`send`](ProgramHandle::send) injects a message into the merged stream.
/// * [`kill`](ProgramHandle::kill) stops the program without processing any
///   further messages.
#[derive(Clone)]
pub struct ProgramHandle<Msg: Send + 'static> {
    msg_tx: mpsc::UnboundedSender<Msg>,
    kill: Arc<Notify>,
}

impl<Msg: Send + 'static> ProgramHandle<Msg> {
    /// Send a message to the running program.  Dropped silently once the
    /// program has exited.
    pub fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }

    /// Stop the program at its next wake-up.
    pub fn kill(&self) {
        self.kill.notify_one();
    }
}

/// The program driver.
///
/// `Program` owns the single current model and the receiving end of the
/// channel every producer writes into.  Running it starts the renderer, the
/// keyboard reader and the model's subscriptions, then applies messages one
/// at a time in arrival order:
///
/// 1. `update` consumes the current model and the message,
/// 2. the returned model replaces the old one,
/// 3. the command is executed and subscriptions are reconciled,
/// 4. `view` renders the new model and the text goes to the [`Renderer`].
///
/// When a command quits, the driver cancels every producer and returns the
/// final model.  Nothing queued behind the quitting message is processed.
///
/// # Example
///
/// ```rust,ignore
/// use steep_core::{Program, ProgramError};
///
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let model = Program::<MyApp>::new(()).run().await?;
///     Ok(())
/// }
/// ```
pub struct Program<M: Model, R: Renderer = TerminalRenderer> {
    model: M,
    init_cmd: Command<M::Message>,
    driver: Driver<M, R>,
}

/// Message filter applied before `update`.
type Filter<Msg> = Box<dyn Fn(Msg) -> Option<Msg> + Send>;

struct Driver<M: Model, R: Renderer> {
    renderer: R,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    subscriptions: SubscriptionManager<M::Message>,
    input: Option<AbortHandle>,
    kill: Arc<Notify>,
    filter: Option<Filter<M::Message>>,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Create a terminal program with default options.
    pub fn new(flags: M::Flags) -> Self {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a terminal program with custom options.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Self {
        let renderer = TerminalRenderer::new(options.alt_screen, options.output)
            .with_panic_hook(options.catch_panics)
            .with_title(options.title.clone());
        Self::with_renderer(flags, options, renderer)
    }
}

impl<M: Model, R: Renderer> Program<M, R> {
    /// Create a program that hands its views to `renderer`.
    pub fn with_renderer(flags: M::Flags, options: ProgramOptions, renderer: R) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (model, init_cmd) = M::init(flags);
        let subscriptions = SubscriptionManager::new(msg_tx.clone());

        Self {
            model,
            init_cmd,
            driver: Driver {
                renderer,
                msg_tx,
                msg_rx,
                subscriptions,
                input: None,
                kill: Arc::new(Notify::new()),
                filter: None,
                options,
            },
        }
    }

    /// Set a message filter.  Messages pass through the filter before reaching
    /// `update`; return `Some(msg)` to pass (possibly transformed), `None` to
    /// drop.  A dropped message causes no transition and no render.
    pub fn with_filter(
        mut self,
        filter: impl Fn(M::Message) -> Option<M::Message> + Send + 'static,
    ) -> Self {
        self.driver.filter = Some(Box::new(filter));
        self
    }

    /// The model as initialized, before any message.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a sender for external message injection.
    pub fn sender(&self) -> mpsc::UnboundedSender<M::Message> {
        self.driver.msg_tx.clone()
    }

    /// Get a handle for external control (send messages, kill).
    pub fn handle(&self) -> ProgramHandle<M::Message> {
        ProgramHandle {
            msg_tx: self.driver.msg_tx.clone(),
            kill: self.driver.kill.clone(),
        }
    }

    /// Run the program until it quits, returning the final model and the
    /// renderer.
    pub async fn run_with_renderer(self) -> Result<(M, R), ProgramError> {
        let Program {
            model,
            init_cmd,
            mut driver,
        } = self;
        let model = driver.run(model, init_cmd).await?;
        Ok((model, driver.renderer))
    }

    /// Run the program until it quits, returning the final model.
    pub async fn run(self) -> Result<M, ProgramError> {
        self.run_with_renderer().await.map(|(model, _)| model)
    }
}

impl<M: Model, R: Renderer> Driver<M, R> {
    async fn run(&mut self, model: M, init_cmd: Command<M::Message>) -> Result<M, ProgramError> {
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(ProgramError::NoRuntime);
        }

        self.renderer.start()?;
        tracing::info!("program started");

        let result = self.event_loop(model, init_cmd).await;

        self.shutdown();
        let stopped = self.renderer.stop();
        let model = result?;
        stopped?;
        tracing::info!("program exited");
        Ok(model)
    }

    async fn event_loop(
        &mut self,
        mut model: M,
        init_cmd: Command<M::Message>,
    ) -> Result<M, ProgramError> {
        self.renderer.render(&model.view())?;
        if self.execute(init_cmd) {
            tracing::debug!("init command quit");
            return Ok(model);
        }

        if self.options.capture_input {
            let input = key_presses(|key: KeyPress| {
                Some(<M::Message as From<KeyPress>>::from(key))
            });
            self.input = Some((input.spawn)(self.msg_tx.clone()));
        }
        self.subscriptions.reconcile(model.subscriptions());

        let mut handle_signals = self.options.handle_signals;
        loop {
            let msg = tokio::select! {
                biased;

                _ = self.kill.notified() => {
                    tracing::info!("program killed");
                    return Ok(model);
                }

                signal = tokio::signal::ctrl_c(), if handle_signals => {
                    match signal {
                        Ok(()) => {
                            tracing::info!("received ctrl+c signal");
                            return Ok(model);
                        }
                        Err(err) => {
                            tracing::warn!(%err, "cannot listen for ctrl+c; signal handling disabled");
                            handle_signals = false;
                            continue;
                        }
                    }
                }

                Some(msg) = self.msg_rx.recv() => msg,
            };

            let (next, quit) = self.step(model, msg)?;
            model = next;
            if quit {
                tracing::debug!("quit requested");
                return Ok(model);
            }
        }
    }

    /// Apply one message.  Returns the new model and whether it asked to quit.
    fn step(&mut self, model: M, msg: M::Message) -> Result<(M, bool), ProgramError> {
        let msg = match &self.filter {
            Some(filter) => match filter(msg) {
                Some(msg) => msg,
                None => return Ok((model, false)),
            },
            None => msg,
        };

        let (model, cmd) = model.update(msg);
        let quit = self.execute(cmd);
        if !quit {
            self.subscriptions.reconcile(model.subscriptions());
        }
        self.renderer.render(&model.view())?;
        Ok((model, quit))
    }

    /// Execute a command.  Returns true when it quits.
    fn execute(&mut self, cmd: Command<M::Message>) -> bool {
        let mut quit = false;
        for action in cmd.into_actions() {
            match action {
                Action::Message(msg) => {
                    let _ = self.msg_tx.send(msg);
                }
                Action::Quit => quit = true,
            }
        }
        quit
    }

    /// Cancel every producer.  Pending waits are interrupted, not run out.
    fn shutdown(&mut self) {
        if let Some(input) = self.input.take() {
            input.abort();
        }
        let running = self.subscriptions.active_count();
        self.subscriptions.shutdown();
        tracing::debug!(subscriptions = running, "producers stopped");
    }
}

/// Open a log file for debugging terminal programs.
///
/// The file is opened in append mode.  Since the terminal belongs to the UI,
/// point your `tracing` subscriber at this file instead of stdout.
///
/// ```no_run
/// use steep_core::runtime::log_to_file;
/// use std::io::Write;
///
/// let mut f = log_to_file("debug.log").unwrap();
/// writeln!(f, "debug message").unwrap();
/// ```
pub fn log_to_file(path: impl AsRef<std::path::Path>) -> Result<std::fs::File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::{subscribe, Subscription};
    use crate::subscriptions::Every;
    use crate::testing::RecordingRenderer;
    use std::time::Duration;

    /// Counts down on ticks and records every key it sees.
    struct Countdown {
        remaining: u32,
        keys: Vec<String>,
    }

    #[derive(Debug)]
    enum Msg {
        Key(String),
        Tick,
    }

    impl From<KeyPress> for Msg {
        fn from(key: KeyPress) -> Self {
            Msg::Key(key.into_string())
        }
    }

    impl Model for Countdown {
        type Message = Msg;
        type Flags = u32;

        fn init(remaining: u32) -> (Self, Command<Msg>) {
            let model = Countdown {
                remaining,
                keys: vec![],
            };
            (model, Command::none())
        }

        fn update(mut self, msg: Msg) -> (Self, Command<Msg>) {
            match msg {
                Msg::Key(key) if key == "q" => return (self, Command::quit()),
                Msg::Key(key) if key == "echo" => {
                    self.keys.push(key);
                    return (self, Command::message(Msg::Key("echoed".into())));
                }
                Msg::Key(key) => self.keys.push(key),
                Msg::Tick if self.remaining == 0 => return (self, Command::quit()),
                Msg::Tick => self.remaining -= 1,
            }
            (self, Command::none())
        }

        fn view(&self) -> String {
            format!("{} left, keys: {}", self.remaining, self.keys.join(","))
        }

        fn subscriptions(&self) -> Vec<Subscription<Msg>> {
            vec![subscribe(Every::new(Duration::from_secs(1), "tick")).map(|_| Msg::Tick)]
        }
    }

    fn program(remaining: u32) -> Program<Countdown, RecordingRenderer> {
        Program::with_renderer(remaining, ProgramOptions::headless(), RecordingRenderer::new())
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_quits_on_the_tick_after_zero() {
        let start = tokio::time::Instant::now();
        let (model, renderer) = program(3).run_with_renderer().await.unwrap();

        assert_eq!(model.remaining, 0);
        // three decrements, then the quitting tick
        assert_eq!(start.elapsed(), Duration::from_secs(4));
        // initial view plus one per transition
        assert_eq!(renderer.frames().len(), 5);
        assert_eq!(renderer.frames()[0], "3 left, keys: ");
        assert_eq!(renderer.last_frame(), Some("0 left, keys: "));
        assert!(renderer.was_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn messages_are_applied_in_arrival_order() {
        let prog = program(100);
        let handle = prog.handle();
        for key in ["a", "b", "c", "q"] {
            handle.send(Msg::Key(key.into()));
        }
        let model = prog.run().await.unwrap();
        assert_eq!(model.keys, vec!["a", "b", "c"]);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_is_processed_after_quit() {
        let prog = program(100);
        let handle = prog.handle();
        handle.send(Msg::Key("a".into()));
        handle.send(Msg::Key("q".into()));
        handle.send(Msg::Key("b".into()));
        let (model, renderer) = prog.run_with_renderer().await.unwrap();

        assert_eq!(model.keys, vec!["a"]);
        assert_eq!(renderer.frames().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn command_messages_queue_behind_pending_ones() {
        let prog = program(100);
        let handle = prog.handle();
        handle.send(Msg::Key("echo".into()));
        handle.send(Msg::Key("x".into()));
        handle.send(Msg::Key("q".into()));
        let model = prog.run().await.unwrap();
        // "echoed" was enqueued after "q" was already waiting
        assert_eq!(model.keys, vec!["echo", "x"]);
    }

    #[tokio::test(start_paused = true)]
    async fn kill_stops_without_processing() {
        let prog = program(100);
        let handle = prog.handle();
        handle.kill();
        handle.send(Msg::Key("a".into()));
        let model = prog.run().await.unwrap();
        assert!(model.keys.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn filter_drops_messages_before_update() {
        let prog = program(100).with_filter(|msg| match msg {
            Msg::Key(ref k) if k == "secret" => None,
            other => Some(other),
        });
        let handle = prog.handle();
        handle.send(Msg::Key("secret".into()));
        handle.send(Msg::Key("open".into()));
        handle.send(Msg::Key("q".into()));
        let (model, renderer) = prog.run_with_renderer().await.unwrap();

        assert_eq!(model.keys, vec!["open"]);
        // no render for the dropped message
        assert_eq!(renderer.frames().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn key_presses_convert_into_messages() {
        let prog = program(100);
        let handle = prog.handle();
        handle.send(Msg::from(KeyPress::new("down")));
        handle.send(Msg::from(KeyPress::new("q")));
        let model = prog.run().await.unwrap();
        assert_eq!(model.keys, vec!["down"]);
    }

    #[test]
    fn running_outside_tokio_is_a_startup_error() {
        let prog = program(1);
        let result = futures::executor::block_on(prog.run_with_renderer());
        assert!(matches!(result, Err(ProgramError::NoRuntime)));
    }

    struct Quitter;

    impl Model for Quitter {
        type Message = Msg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<Msg>) {
            (Quitter, Command::quit())
        }

        fn update(self, _msg: Msg) -> (Self, Command<Msg>) {
            (self, Command::none())
        }

        fn view(&self) -> String {
            "bye".into()
        }
    }

    #[tokio::test]
    async fn init_command_can_quit() {
        let prog: Program<Quitter, RecordingRenderer> =
            Program::with_renderer((), ProgramOptions::headless(), RecordingRenderer::new());
        let (_, renderer) = prog.run_with_renderer().await.unwrap();
        assert_eq!(renderer.frames(), ["bye"]);
    }
}
