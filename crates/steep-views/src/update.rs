//! The transition function, split by phase.

use crate::message::Msg;
use crate::model::{Phase, Views, NUM_CHOICES};
use steep::Command;

/// Keys that end the program in either phase.
const QUIT_KEYS: [&str; 3] = ["q", "esc", "ctrl+c"];

/// Apply one message.
///
/// Unhandled messages leave the model untouched.  Frames are ignored while
/// choosing and ticks once a task is chosen; neither is buffered.
pub fn update(model: Views, msg: Msg) -> (Views, Command<Msg>) {
    match model.phase {
        Phase::Choosing => update_choosing(model, msg),
        Phase::Chosen => update_chosen(model, msg),
    }
}

fn update_choosing(mut model: Views, msg: Msg) -> (Views, Command<Msg>) {
    match msg {
        Msg::KeyPress(key) => match key.as_str() {
            "j" | "down" => model.choice = (model.choice + 1).min(NUM_CHOICES - 1),
            "k" | "up" => model.choice = model.choice.saturating_sub(1),
            "enter" => model.phase = Phase::Chosen,
            k if QUIT_KEYS.contains(&k) => return (model, Command::quit()),
            _ => {}
        },
        Msg::Tick => {
            if model.ticks_remaining == 0 {
                return (model, Command::quit());
            }
            model.ticks_remaining -= 1;
        }
        Msg::Frame => {}
    }
    (model, Command::none())
}

fn update_chosen(mut model: Views, msg: Msg) -> (Views, Command<Msg>) {
    match msg {
        Msg::KeyPress(key) if QUIT_KEYS.contains(&key.as_str()) => {
            return (model, Command::quit());
        }
        Msg::KeyPress(_) | Msg::Tick => {}
        Msg::Frame => {
            model.frames_elapsed = model.frames_elapsed.saturating_add(1);
            model.progress = eased_progress(&model);
        }
    }
    (model, Command::none())
}

/// `ease(frames / animation_frames)`, clamped to `[0, 1]`.  The linear
/// fraction stops at 1 so curves that fall back past the end stay finished.
fn eased_progress(model: &Views) -> f64 {
    let total = model.settings.animation_frames;
    let linear = if total == 0 {
        1.0
    } else {
        (f64::from(model.frames_elapsed) / f64::from(total)).min(1.0)
    };
    let eased = model.settings.easing.apply(linear);
    if eased.is_nan() {
        return model.progress;
    }
    eased.clamp(0.0, 1.0)
}
