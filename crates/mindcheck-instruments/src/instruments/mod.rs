pub mod asq;
pub mod gad7;
pub mod k10;
pub mod phq9a;

use crate::scoring::{Choice, Item};

/// Frequency scale shared by PHQ-9A and GAD-7, scored 0–3.
pub(crate) fn frequency_choices() -> Vec<Choice> {
    choices(&[
        (0, "Not at all"),
        (1, "Several days"),
        (2, "More than half the days"),
        (3, "Nearly every day"),
    ])
}

pub(crate) fn items(prompts: &[&str]) -> Vec<Item> {
    prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| Item {
            number: i + 1,
            prompt: prompt.to_string(),
        })
        .collect()
}

pub(crate) fn choices(pairs: &[(u8, &str)]) -> Vec<Choice> {
    pairs
        .iter()
        .map(|(value, label)| Choice {
            value: *value,
            label: label.to_string(),
        })
        .collect()
}
