use crate::command::{Action, Command};
use crate::model::Model;
use crate::render::Renderer;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::io;

/// A headless test harness that drives a [`Model`] without a terminal or a
/// runtime.
///
/// `TestProgram` applies messages synchronously, exactly like the real
/// driver: one `update` per message, the returned model replaces the old one,
/// and once a command quits every later message is ignored.  Messages
/// produced by [`Command::message`] are queued; flush them with
/// [`drain_messages`](TestProgram::drain_messages).
///
/// # Example
///
/// ```rust,ignore
/// use steep_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Counter>::new(());
/// prog.send(Msg::Key("+".into()));
/// assert_eq!(prog.model().count, 1);
/// assert!(prog.view().contains("Count: 1"));
/// ```
pub struct TestProgram<M: Model> {
    // Always `Some` between calls; taken only for the duration of `update`.
    model: Option<M>,
    pending_messages: Vec<M::Message>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        Self::from_model(model).with_command(init_cmd)
    }

    /// Start from an already-built model, skipping `init`.
    pub fn from_model(model: M) -> Self {
        Self {
            model: Some(model),
            pending_messages: Vec::new(),
            quit: false,
        }
    }

    fn with_command(mut self, cmd: Command<M::Message>) -> Self {
        self.collect(cmd);
        self
    }

    /// Send a message, triggering a single update.
    ///
    /// Returns `true` if this update asked the program to quit.  After a quit
    /// the message is ignored and the model stays as it was.
    pub fn send(&mut self, msg: M::Message) -> bool {
        if self.quit {
            return false;
        }
        let Some(model) = self.model.take() else {
            return false;
        };
        let (model, cmd) = model.update(msg);
        self.model = Some(model);
        let quits = cmd.is_quit();
        self.collect(cmd);
        quits
    }

    /// Send every message in order.
    pub fn send_all(&mut self, msgs: impl IntoIterator<Item = M::Message>) {
        for msg in msgs {
            self.send(msg);
        }
    }

    /// Process queued [`Command::message`] messages until none are left.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() && !self.quit {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                self.send(msg);
            }
        }
    }

    /// Whether some update has quit the program.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// The current model.
    pub fn model(&self) -> &M {
        self.model
            .as_ref()
            .expect("model is only absent while update runs")
    }

    /// Consume the harness, returning the current model.
    pub fn into_model(self) -> M {
        self.model.expect("model is only absent while update runs")
    }

    /// The model's current view.
    pub fn view(&self) -> String {
        self.model().view()
    }

    /// Draw the view onto a ratatui test buffer the way
    /// [`TerminalRenderer`](crate::TerminalRenderer) draws it.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = self.view();
        terminal
            .draw(|frame| {
                frame.render_widget(Paragraph::new(view.as_str()), frame.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Draw the view and return the visible cells as a string, one line per
    /// row.  Trailing blanks within each row are kept.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        for action in cmd.into_actions() {
            match action {
                Action::Message(msg) => self.pending_messages.push(msg),
                Action::Quit => self.quit = true,
            }
        }
    }
}

/// A [`Renderer`] that keeps every frame it is given.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<String>,
    started: bool,
    stopped: bool,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Whether `start` and then `stop` were both called.
    pub fn was_stopped(&self) -> bool {
        self.started && self.stopped
    }
}

impl Renderer for RecordingRenderer {
    fn start(&mut self) -> io::Result<()> {
        self.started = true;
        Ok(())
    }

    fn render(&mut self, view: &str) -> io::Result<()> {
        self.frames.push(view.to_owned());
        Ok(())
    }

    fn stop(&mut self) -> io::Result<()> {
        self.stopped = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyPress;

    struct Counter {
        count: i64,
    }

    #[derive(Debug)]
    enum CounterMsg {
        Increment,
        Decrement,
        Key(String),
    }

    impl From<KeyPress> for CounterMsg {
        fn from(key: KeyPress) -> Self {
            CounterMsg::Key(key.into_string())
        }
    }

    impl Model for Counter {
        type Message = CounterMsg;
        type Flags = i64;

        fn init(initial: i64) -> (Self, Command<CounterMsg>) {
            (Counter { count: initial }, Command::none())
        }

        fn update(mut self, msg: CounterMsg) -> (Self, Command<CounterMsg>) {
            match msg {
                CounterMsg::Increment => self.count += 1,
                CounterMsg::Decrement => self.count -= 1,
                CounterMsg::Key(k) if k == "q" => return (self, Command::quit()),
                CounterMsg::Key(k) if k == "+" => {
                    return (self, Command::message(CounterMsg::Increment));
                }
                CounterMsg::Key(_) => {}
            }
            (self, Command::none())
        }

        fn view(&self) -> String {
            format!("Count: {}", self.count)
        }
    }

    #[test]
    fn init_with_flags() {
        let prog = TestProgram::<Counter>::new(42);
        assert_eq!(prog.model().count, 42);
    }

    #[test]
    fn send_applies_updates_in_order() {
        let mut prog = TestProgram::<Counter>::new(0);
        prog.send_all([
            CounterMsg::Increment,
            CounterMsg::Increment,
            CounterMsg::Decrement,
        ]);
        assert_eq!(prog.model().count, 1);
    }

    #[test]
    fn command_messages_wait_for_drain() {
        let mut prog = TestProgram::<Counter>::new(0);
        prog.send(CounterMsg::Key("+".into()));
        assert_eq!(prog.model().count, 0);
        prog.drain_messages();
        assert_eq!(prog.model().count, 1);
    }

    #[test]
    fn messages_after_quit_are_ignored() {
        let mut prog = TestProgram::<Counter>::new(5);
        assert!(prog.send(CounterMsg::Key("q".into())));
        assert!(prog.has_quit());
        assert!(!prog.send(CounterMsg::Increment));
        assert_eq!(prog.model().count, 5);
    }

    #[test]
    fn render_string_draws_the_view() {
        let mut prog = TestProgram::<Counter>::new(0);
        prog.send(CounterMsg::Decrement);
        let content = prog.render_string(20, 1);
        assert!(content.starts_with("Count: -1"));
        assert_eq!(content.chars().count(), 20);
    }

    #[test]
    fn recording_renderer_keeps_frames() {
        let mut renderer = RecordingRenderer::new();
        renderer.start().unwrap();
        renderer.render("one").unwrap();
        renderer.render("two").unwrap();
        renderer.stop().unwrap();
        assert_eq!(renderer.frames(), ["one", "two"]);
        assert_eq!(renderer.last_frame(), Some("two"));
        assert!(renderer.was_stopped());
    }
}
