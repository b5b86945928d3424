use std::sync::LazyLock;

use crate::scoring::{Choice, Item};
use crate::{Instrument, InstrumentId};

/// GAD-7: Generalized Anxiety Disorder scale. 7 items, each 0–3. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn recall_window(&self) -> &str {
        "past 2 weeks"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            super::items(&[
                "Feeling nervous, anxious, or on edge",
                "Not being able to stop or control worrying",
                "Worrying too much about different things",
                "Trouble relaxing",
                "Being so restless that it is hard to sit still",
                "Becoming easily annoyed or irritable",
                "Feeling afraid, as if something awful might happen",
            ])
        });
        &ITEMS
    }

    fn choices(&self) -> &[Choice] {
        static CHOICES: LazyLock<Vec<Choice>> = LazyLock::new(super::frequency_choices);
        &CHOICES
    }
}
