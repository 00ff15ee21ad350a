use crate::message::Msg;
use crate::settings::Settings;
use steep::{subscribe, Command, Every, Model, Subscription};

/// The tasks offered on the first screen.
pub const CHOICES: [&str; 4] = [
    "Plant carrots",
    "Go to the market",
    "Read something",
    "See friends",
];

/// Number of entries in [`CHOICES`].
pub const NUM_CHOICES: usize = CHOICES.len();

/// Which screen the program is on.  `Choosing` always comes first and moves
/// to `Chosen` at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Choosing,
    Chosen,
}

/// The whole program state.
#[derive(Debug, Clone, PartialEq)]
pub struct Views {
    pub(crate) choice: usize,
    pub(crate) phase: Phase,
    pub(crate) ticks_remaining: u32,
    pub(crate) frames_elapsed: u32,
    pub(crate) progress: f64,
    pub(crate) settings: Settings,
}

impl Views {
    /// The initial state for `settings`.
    pub fn new(settings: Settings) -> Self {
        Self {
            choice: 0,
            phase: Phase::Choosing,
            ticks_remaining: settings.ticks,
            frames_elapsed: 0,
            progress: 0.0,
            settings,
        }
    }

    /// Index of the highlighted task, in `0..NUM_CHOICES`.
    pub fn choice(&self) -> usize {
        self.choice
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a task has been picked.
    pub fn chosen(&self) -> bool {
        self.phase == Phase::Chosen
    }

    /// Ticks left before the countdown ends the program.
    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }

    /// Animation frames seen since the task was picked.
    pub fn frames_elapsed(&self) -> u32 {
        self.frames_elapsed
    }

    /// Download progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for Views {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Model for Views {
    type Message = Msg;
    type Flags = Settings;

    fn init(settings: Settings) -> (Self, Command<Msg>) {
        (Views::new(settings), Command::none())
    }

    fn update(self, msg: Msg) -> (Self, Command<Msg>) {
        crate::update::update(self, msg)
    }

    fn view(&self) -> String {
        crate::view::view(self)
    }

    // Both clocks run for the whole program; update decides which one
    // matters in the current phase.
    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![
            subscribe(Every::new(self.settings.tick_interval, "tick")).map(|_| Msg::Tick),
            subscribe(Every::new(self.settings.frame_interval, "frame")).map(|_| Msg::Frame),
        ]
    }
}
