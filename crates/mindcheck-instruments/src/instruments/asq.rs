use std::sync::LazyLock;

use crate::scoring::{Choice, Item};
use crate::{Instrument, InstrumentId};

/// ASQ: Ask Suicide-Screening Questions. 4 yes/no items.
/// Any "yes" is a positive screen and requires immediate follow-up.
pub struct Asq;

impl Instrument for Asq {
    fn id(&self) -> InstrumentId {
        InstrumentId::Asq
    }

    fn name(&self) -> &str {
        "ASQ"
    }

    fn recall_window(&self) -> &str {
        "past few weeks"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            super::items(&[
                "In the past few weeks, have you wished you were dead?",
                "In the past few weeks, have you felt that you or your family would be better off if you were dead?",
                "In the past week, have you been having thoughts about killing yourself?",
                "Have you ever tried to kill yourself?",
            ])
        });
        &ITEMS
    }

    fn choices(&self) -> &[Choice] {
        static CHOICES: LazyLock<Vec<Choice>> =
            LazyLock::new(|| super::choices(&[(1, "Yes"), (0, "No")]));
        &CHOICES
    }
}
