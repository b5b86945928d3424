use std::sync::LazyLock;

use crate::scoring::{Choice, Item};
use crate::{Instrument, InstrumentId};

/// PHQ-9A: Patient Health Questionnaire, modified for adolescents.
/// 9 items, each 0–3. Total 0–27. Item 9 asks about self-harm thoughts.
pub struct Phq9a;

/// Zero-based index of the self-harm item.
pub const ITEM9_INDEX: usize = 8;

impl Instrument for Phq9a {
    fn id(&self) -> InstrumentId {
        InstrumentId::Phq9a
    }

    fn name(&self) -> &str {
        "PHQ-9A"
    }

    fn recall_window(&self) -> &str {
        "past 2 weeks"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            super::items(&[
                "Feeling down, depressed, irritable, or hopeless",
                "Little interest or pleasure in doing things",
                "Trouble falling asleep, staying asleep, or sleeping too much",
                "Poor appetite, weight loss, or overeating",
                "Feeling tired, or having little energy",
                "Feeling bad about yourself, or feeling that you are a failure or have let yourself or your family down",
                "Trouble concentrating on things like school work, reading, or watching TV",
                "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you moved around a lot more than usual",
                "Thoughts that you would be better off dead, or of hurting yourself in some way",
            ])
        });
        &ITEMS
    }

    fn choices(&self) -> &[Choice] {
        static CHOICES: LazyLock<Vec<Choice>> = LazyLock::new(super::frequency_choices);
        &CHOICES
    }
}
