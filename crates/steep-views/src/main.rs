use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;
use steep::widgets::Easing;
use steep::{OutputTarget, ProgramOptions};
use steep_views::{Settings, Views};
use tracing_subscriber::EnvFilter;

/// Pick a task for today, then watch it download.
#[derive(Parser, Debug)]
#[command(name = "steep-views", version)]
struct Cli {
    /// Seconds to wait for a choice before quitting
    #[arg(long, default_value_t = 10)]
    ticks: u32,

    /// Length of one countdown tick in milliseconds
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Animation frames per countdown tick
    #[arg(long, default_value_t = Settings::DEFAULT_FPS)]
    fps: u32,

    /// Easing curve for the download bar (linear, out-quad, in-out-cubic,
    /// out-back, out-bounce)
    #[arg(long, default_value_t = Easing::OutBounce)]
    easing: Easing,

    /// Draw in the main screen instead of the alternate screen
    #[arg(long)]
    inline: bool,

    /// Draw on stderr, leaving stdout free for piping
    #[arg(long)]
    stderr: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            ticks: self.ticks,
            easing: self.easing,
            ..Settings::default()
        }
        .with_clock(Duration::from_millis(self.tick_ms.max(1)), self.fps)
    }

    fn options(&self) -> ProgramOptions {
        ProgramOptions {
            alt_screen: !self.inline,
            output: if self.stderr {
                OutputTarget::Stderr
            } else {
                OutputTarget::Stdout
            },
            title: Some("What to do today?".into()),
            ..ProgramOptions::default()
        }
    }
}

/// Send logs to `path`; the terminal belongs to the UI.
fn init_logging(path: &Path, debug: bool) -> anyhow::Result<()> {
    let file = steep::log_to_file(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!("cannot install log subscriber: {err}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(err) = init_logging(path, cli.debug) {
            eprintln!("could not start program: {err:#}");
            return ExitCode::FAILURE;
        }
    }

    let settings = cli.settings();
    tracing::debug!(?settings, "starting");

    match steep::run_with::<Views>(settings, cli.options()).await {
        Ok(model) => {
            tracing::info!(
                choice = model.choice(),
                chosen = model.chosen(),
                progress = model.progress(),
                "finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "program failed");
            eprintln!("could not start program: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_library() {
        let cli = Cli::parse_from(["steep-views"]);
        assert_eq!(cli.settings(), Settings::default());
        assert!(cli.options().alt_screen);
    }

    #[test]
    fn flags_shape_settings_and_options() {
        let cli = Cli::parse_from([
            "steep-views",
            "--ticks",
            "3",
            "--tick-ms",
            "500",
            "--fps",
            "10",
            "--easing",
            "linear",
            "--inline",
            "--stderr",
        ]);
        let settings = cli.settings();
        assert_eq!(settings.ticks, 3);
        assert_eq!(settings.frame_interval, Duration::from_millis(50));
        assert_eq!(settings.easing, Easing::Linear);

        let options = cli.options();
        assert!(!options.alt_screen);
        assert_eq!(options.output, OutputTarget::Stderr);
    }

    #[test]
    fn unknown_easing_is_rejected() {
        assert!(Cli::try_parse_from(["steep-views", "--easing", "wobble"]).is_err());
    }
}
