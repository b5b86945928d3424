use std::fmt;

use mindcheck_instruments::InstrumentId;
use serde::{Deserialize, Serialize};

/// The six questionnaire steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    RegionSelect,
    Intro,
    Phq9a,
    Gad7,
    K10,
    AsqSummary,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::RegionSelect,
        Step::Intro,
        Step::Phq9a,
        Step::Gad7,
        Step::K10,
        Step::AsqSummary,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// The step on which `instrument` is answered.
    pub fn for_instrument(instrument: InstrumentId) -> Step {
        match instrument {
            InstrumentId::Phq9a => Step::Phq9a,
            InstrumentId::Gad7 => Step::Gad7,
            InstrumentId::K10 => Step::K10,
            InstrumentId::Asq => Step::AsqSummary,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Step::RegionSelect => "region selection",
            Step::Intro => "introduction",
            Step::Phq9a => "PHQ-9A",
            Step::Gad7 => "GAD-7",
            Step::K10 => "K10",
            Step::AsqSummary => "ASQ and summary",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}/{} ({})", self.index() + 1, Self::COUNT, self.name())
    }
}
