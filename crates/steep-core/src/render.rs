use crossterm::{
    cursor, execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};
use std::io::{self, stderr, stdout, Stderr, Stdout, Write};

/// Where rendered views end up.
///
/// The runtime only produces text; a `Renderer` puts that text somewhere.
/// [`TerminalRenderer`] draws it on the terminal, while
/// [`RecordingRenderer`](crate::testing::RecordingRenderer) keeps every frame
/// for assertions.
pub trait Renderer: Send {
    /// Prepare the output device.  Called once before the first frame.
    fn start(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Show one rendered view.
    fn render(&mut self, view: &str) -> io::Result<()>;

    /// Release the output device.  Called once when the program exits.
    fn stop(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Output target for the terminal UI.
///
/// By default the UI renders to **stdout**.  When stdout is piped, switch to
/// [`Stderr`](OutputTarget::Stderr) so the UI still reaches the terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout (default).
    #[default]
    Stdout,
    /// Write to stderr.
    Stderr,
}

/// Writer that wraps either stdout or stderr.
pub(crate) enum Output {
    Stdout(Stdout),
    Stderr(Stderr),
}

impl Output {
    fn new(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout(stdout()),
            OutputTarget::Stderr => Output::Stderr(stderr()),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::Stderr(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::Stderr(w) => w.flush(),
        }
    }
}

/// Draws each view as a plain ratatui [`Paragraph`] covering the whole
/// terminal.  ratatui diffs consecutive frames, so only changed cells are
/// written.
pub struct TerminalRenderer {
    alt_screen: bool,
    catch_panics: bool,
    output: OutputTarget,
    title: Option<String>,
    terminal: Option<Terminal<CrosstermBackend<Output>>>,
}

impl TerminalRenderer {
    /// Create a renderer.  Nothing touches the terminal until
    /// [`start`](Renderer::start).
    pub fn new(alt_screen: bool, output: OutputTarget) -> Self {
        Self {
            alt_screen,
            catch_panics: true,
            output,
            title: None,
            terminal: None,
        }
    }

    /// Whether to install a panic hook that restores the terminal.
    pub fn with_panic_hook(mut self, catch_panics: bool) -> Self {
        self.catch_panics = catch_panics;
        self
    }

    /// Set the terminal title on start.
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    fn enter(&self) -> io::Result<Terminal<CrosstermBackend<Output>>> {
        let mut writer = Output::new(self.output);
        if self.alt_screen {
            execute!(writer, EnterAlternateScreen)?;
        }
        if let Some(ref title) = self.title {
            execute!(writer, SetTitle(title))?;
        }
        execute!(writer, cursor::Hide)?;
        Terminal::new(CrosstermBackend::new(writer))
    }
}

impl Renderer for TerminalRenderer {
    fn start(&mut self) -> io::Result<()> {
        if self.catch_panics {
            install_panic_hook(self.alt_screen, self.output);
        }

        enable_raw_mode()?;
        match self.enter() {
            Ok(terminal) => {
                self.terminal = Some(terminal);
                Ok(())
            }
            Err(err) => {
                let _ = restore_terminal(self.alt_screen, self.output);
                Err(err)
            }
        }
    }

    fn render(&mut self, view: &str) -> io::Result<()> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Ok(());
        };
        terminal.draw(|frame| {
            frame.render_widget(Paragraph::new(view), frame.area());
        })?;
        Ok(())
    }

    fn stop(&mut self) -> io::Result<()> {
        if self.terminal.take().is_some() {
            restore_terminal(self.alt_screen, self.output)?;
        }
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Restore the terminal even when a panic unwinds through the program.
/// Installed at most once per process.
fn install_panic_hook(alt_screen: bool, output: OutputTarget) {
    use std::sync::Once;
    static HOOK_INSTALLED: Once = Once::new();
    HOOK_INSTALLED.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal(alt_screen, output);
            original_hook(info);
        }));
    });
}

fn restore_terminal(alt_screen: bool, output: OutputTarget) -> io::Result<()> {
    // Keep going when one step fails; report the raw mode error.
    let raw = disable_raw_mode();
    let mut writer = Output::new(output);
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}
