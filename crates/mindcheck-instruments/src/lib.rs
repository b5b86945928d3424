//! mindcheck-instruments
//!
//! Screening instrument definitions and the scoring engine. Pure data and
//! pure functions: item catalogues for PHQ-9A, GAD-7, K10 and ASQ, the
//! answer aggregator, severity banding, display labels, and the overall
//! risk tier classifier.

pub mod bands;
pub mod error;
pub mod instruments;
pub mod labels;
pub mod scoring;
pub mod tier;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use error::InstrumentError;
use scoring::{Choice, Item};

/// Identifies one of the supported instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentId {
    Phq9a,
    Gad7,
    K10,
    Asq,
}

impl InstrumentId {
    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentId::Phq9a => "phq9a",
            InstrumentId::Gad7 => "gad7",
            InstrumentId::K10 => "k10",
            InstrumentId::Asq => "asq",
        }
    }

    /// The static definition backing this id.
    pub fn definition(self) -> &'static dyn Instrument {
        match self {
            InstrumentId::Phq9a => &instruments::phq9a::Phq9a,
            InstrumentId::Gad7 => &instruments::gad7::Gad7,
            InstrumentId::K10 => &instruments::k10::K10,
            InstrumentId::Asq => &instruments::asq::Asq,
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentId {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phq9a" => Ok(InstrumentId::Phq9a),
            "gad7" => Ok(InstrumentId::Gad7),
            "k10" => Ok(InstrumentId::K10),
            "asq" => Ok(InstrumentId::Asq),
            other => Err(InstrumentError::UnknownInstrument(other.to_string())),
        }
    }
}

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    fn id(&self) -> InstrumentId;

    /// Human-readable name (e.g., "PHQ-9A", "GAD-7").
    fn name(&self) -> &str;

    /// Period the respondent is asked to recall, e.g. "past 2 weeks".
    fn recall_window(&self) -> &str;

    /// Questions in presentation order. The index of an item is its identity.
    fn items(&self) -> &[Item];

    /// Allowed responses for every item of this instrument.
    fn choices(&self) -> &[Choice];

    fn item_count(&self) -> usize {
        self.items().len()
    }

    /// Highest total a fully answered questionnaire can reach.
    fn max_total(&self) -> u32 {
        let top = self.choices().iter().map(|c| u32::from(c.value)).max().unwrap_or(0);
        top * self.item_count() as u32
    }

    /// Check that `value` is a legal response for the item at `index`.
    fn validate_response(&self, index: usize, value: u8) -> Result<(), InstrumentError> {
        if index >= self.item_count() {
            return Err(InstrumentError::ItemOutOfRange {
                instrument: self.id(),
                index,
                len: self.item_count(),
            });
        }
        if !self.choices().iter().any(|c| c.value == value) {
            return Err(InstrumentError::InvalidResponse {
                instrument: self.id(),
                index,
                value,
            });
        }
        Ok(())
    }
}

/// Return all registered instruments, in questionnaire order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9a::Phq9a),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::k10::K10),
        Box::new(instruments::asq::Asq),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id().as_str() == id)
}
