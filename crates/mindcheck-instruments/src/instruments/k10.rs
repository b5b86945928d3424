use std::sync::LazyLock;

use crate::scoring::{Choice, Item};
use crate::{Instrument, InstrumentId};

/// K10: Kessler Psychological Distress Scale.
/// 10 items rated 1–5 on a frequency scale. Total 10–50.
pub struct K10;

impl Instrument for K10 {
    fn id(&self) -> InstrumentId {
        InstrumentId::K10
    }

    fn name(&self) -> &str {
        "K10"
    }

    fn recall_window(&self) -> &str {
        "past 4 weeks"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            super::items(&[
                "About how often did you feel tired out for no good reason?",
                "About how often did you feel nervous?",
                "About how often did you feel so nervous that nothing could calm you down?",
                "About how often did you feel hopeless?",
                "About how often did you feel restless or fidgety?",
                "About how often did you feel so restless you could not sit still?",
                "About how often did you feel depressed?",
                "About how often did you feel that everything was an effort?",
                "About how often did you feel so sad that nothing could cheer you up?",
                "About how often did you feel worthless?",
            ])
        });
        &ITEMS
    }

    fn choices(&self) -> &[Choice] {
        static CHOICES: LazyLock<Vec<Choice>> = LazyLock::new(|| {
            super::choices(&[
                (1, "None of the time"),
                (2, "A little of the time"),
                (3, "Some of the time"),
                (4, "Most of the time"),
                (5, "All of the time"),
            ])
        });
        &CHOICES
    }
}
