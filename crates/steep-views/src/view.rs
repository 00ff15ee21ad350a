//! The render function: one screen per phase.

use crate::model::{Phase, Views, CHOICES};
use steep::widgets::{checkbox, progressbar};

/// Total width of the download bar, borders and percentage included.
const PROGRESS_WIDTH: usize = 80;

/// Render the model as text.
pub fn view(model: &Views) -> String {
    match model.phase {
        Phase::Choosing => choices_view(model),
        Phase::Chosen => chosen_view(model),
    }
}

fn choices_view(model: &Views) -> String {
    let choices = CHOICES
        .iter()
        .enumerate()
        .map(|(i, label)| checkbox(label, i == model.choice))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "What to do today?\n\n\
         {choices}\n\n\
         Program quits in {} seconds.\n\n\
         (press j/k or up/down to select, enter to choose, and q or esc to quit)",
        model.ticks_remaining
    )
}

fn chosen_view(model: &Views) -> String {
    let msg = match model.choice {
        0 => "Carrot planting?\n\nCool, we'll need libgarden and vegeutils...",
        1 => "A trip to the market?\n\nOkay, then we should install marketkit and libshopping...",
        2 => "Reading time?\n\nOkay, cool, then we’ll need a library. Yes, a literal library...",
        _ => "It’s always good to see friends.\n\nFetching social-skills and conversationutils...",
    };

    format!(
        "\n{msg}\n\n\n\n\n Downloading...\n{}%",
        progressbar(PROGRESS_WIDTH, model.progress)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choosing_screen() {
        let mut model = Views::default();
        model.choice = 1;
        model.ticks_remaining = 7;
        let expected = "What to do today?\n\
                        \n\
                        [ ] Plant carrots\n\
                        [x] Go to the market\n\
                        [ ] Read something\n\
                        [ ] See friends\n\
                        \n\
                        Program quits in 7 seconds.\n\
                        \n\
                        (press j/k or up/down to select, enter to choose, and q or esc to quit)";
        assert_eq!(view(&model), expected);
    }

    #[test]
    fn exactly_one_box_is_checked() {
        for choice in 0..CHOICES.len() {
            let mut model = Views::default();
            model.choice = choice;
            assert_eq!(view(&model).matches("[x]").count(), 1);
        }
    }

    #[test]
    fn chosen_screen_has_message_and_bar() {
        let mut model = Views::default();
        model.phase = Phase::Chosen;
        model.progress = 0.0;
        let out = view(&model);

        assert!(out.starts_with("\nCarrot planting?\n\n"));
        assert!(out.contains("\n\n\n\n\n Downloading...\n|"));
        assert!(out.ends_with(&format!("|{}|   0%", ".".repeat(73))));
    }

    #[test]
    fn chosen_message_per_choice() {
        let expected = [
            "Carrot planting?",
            "A trip to the market?",
            "Reading time?",
            "It’s always good to see friends.",
        ];
        for (choice, headline) in expected.iter().enumerate() {
            let mut model = Views::default();
            model.phase = Phase::Chosen;
            model.choice = choice;
            assert!(view(&model).starts_with(&format!("\n{headline}")));
        }
    }

    #[test]
    fn out_of_range_choice_falls_back_to_friends() {
        let mut model = Views::default();
        model.phase = Phase::Chosen;
        model.choice = 9;
        assert!(view(&model).contains("It’s always good to see friends."));
    }

    #[test]
    fn full_progress_reads_one_hundred() {
        let mut model = Views::default();
        model.phase = Phase::Chosen;
        model.progress = 1.0;
        assert!(view(&model).ends_with(&format!("|{}| 100%", "#".repeat(73))));
    }
}
