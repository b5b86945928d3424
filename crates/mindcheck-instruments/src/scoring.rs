use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::{Instrument, InstrumentId};

/// A single question of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub number: usize,
    pub prompt: String,
}

/// One selectable response and the score it contributes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Choice {
    pub value: u8,
    pub label: String,
}

/// Sum of item scores. Unanswered items count as zero, so this is safe to
/// call while a questionnaire is still being filled in.
pub fn total(answers: &[Option<u8>]) -> u32 {
    answers.iter().flatten().map(|&v| u32::from(v)).sum()
}

/// Responses to one ordinal instrument, one slot per item.
///
/// The length is fixed by the instrument at construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerSet {
    instrument: InstrumentId,
    responses: Vec<Option<u8>>,
}

impl AnswerSet {
    pub fn new(instrument: InstrumentId) -> Self {
        Self {
            instrument,
            responses: vec![None; Instrument::item_count(instrument.definition())],
        }
    }

    pub fn instrument(&self) -> InstrumentId {
        self.instrument
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn responses(&self) -> &[Option<u8>] {
        &self.responses
    }

    /// Response at `index`, or `None` if unanswered or out of range.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.responses.get(index).copied().flatten()
    }

    /// Record a response after checking it against the instrument's choices.
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), InstrumentError> {
        Instrument::validate_response(self.instrument.definition(), index, value)?;
        self.responses[index] = Some(value);
        Ok(())
    }

    pub fn total(&self) -> u32 {
        total(&self.responses)
    }

    pub fn is_complete(&self) -> bool {
        self.responses.iter().all(Option::is_some)
    }

    /// Indices of items still waiting for a response.
    pub fn unanswered(&self) -> impl Iterator<Item = usize> + '_ {
        self.responses
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_none())
            .map(|(i, _)| i)
    }
}

/// Yes/no responses to the ASQ safety screen. Every item starts at "no".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AsqAnswers {
    answers: [bool; 4],
}

impl AsqAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.answers.get(index).copied()
    }

    pub fn set(&mut self, index: usize, yes: bool) -> Result<(), InstrumentError> {
        let len = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(InstrumentError::ItemOutOfRange {
                instrument: InstrumentId::Asq,
                index,
                len,
            })?;
        *slot = yes;
        Ok(())
    }

    pub fn any_yes(&self) -> bool {
        self.answers.iter().any(|&yes| yes)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.answers
    }
}
