//! Overall risk tier.
//!
//! The tier is a priority cascade, not a weighted score. Stages are checked
//! in order and the first stage with at least one applicable reason decides
//! the tier; its applicable reasons, in declaration order, form the
//! rationale. Later stages are never consulted once one matches.
//!
//! 1. Safety signals (ASQ yes, PHQ-9A item 9, PHQ-9A total >= 20) -> high
//! 2. Any high-severity band -> high
//! 3. Any moderate band -> mid
//! 4. Otherwise low with an empty rationale

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::bands::{GadBand, K10Band, PhqBand};
use crate::instruments::phq9a::ITEM9_INDEX;
use crate::scoring::AnswerSet;

/// PHQ-9A total at which the safety override fires on its own.
pub const PHQ_TOTAL_OVERRIDE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Mid => "mid",
            Tier::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tier together with the reasons that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverallTier {
    pub tier: Tier,
    pub rationale: Vec<String>,
}

/// Everything the classifier looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierInputs {
    pub phq_total: u32,
    pub phq_band: PhqBand,
    pub gad_band: GadBand,
    pub k10_band: K10Band,
    pub item9_flag: bool,
    pub asq_any_yes: bool,
}

struct Reason {
    applies: fn(&TierInputs) -> bool,
    message: fn(&TierInputs) -> String,
}

struct Stage {
    tier: Tier,
    reasons: &'static [Reason],
}

static CASCADE: [Stage; 3] = [
    Stage {
        tier: Tier::High,
        reasons: &[
            Reason {
                applies: |i| i.asq_any_yes,
                message: |_| "ASQ risk response (yes)".to_string(),
            },
            Reason {
                applies: |i| i.item9_flag,
                message: |_| "PHQ-9A item 9 response > 0".to_string(),
            },
            Reason {
                applies: |i| i.phq_total >= PHQ_TOTAL_OVERRIDE,
                message: |_| "PHQ-9A total 20 or higher".to_string(),
            },
        ],
    },
    Stage {
        tier: Tier::High,
        reasons: &[
            Reason {
                applies: |i| matches!(i.phq_band, PhqBand::ModeratelySevere | PhqBand::Severe),
                message: |i| format!("PHQ-9A {}", i.phq_band.as_str().replace('_', " ")),
            },
            Reason {
                applies: |i| i.gad_band == GadBand::Severe,
                message: |_| "GAD-7 severe".to_string(),
            },
            Reason {
                applies: |i| i.k10_band == K10Band::VeryHigh,
                message: |_| "K10 very high".to_string(),
            },
        ],
    },
    Stage {
        tier: Tier::Mid,
        reasons: &[
            Reason {
                applies: |i| i.phq_band == PhqBand::Moderate,
                message: |_| "PHQ-9A moderate".to_string(),
            },
            Reason {
                applies: |i| i.gad_band == GadBand::Moderate,
                message: |_| "GAD-7 moderate".to_string(),
            },
            Reason {
                applies: |i| i.k10_band == K10Band::High,
                message: |_| "K10 high".to_string(),
            },
        ],
    },
];

impl TierInputs {
    pub fn classify(&self) -> OverallTier {
        for stage in &CASCADE {
            let rationale: Vec<String> = stage
                .reasons
                .iter()
                .filter(|r| (r.applies)(self))
                .map(|r| (r.message)(self))
                .collect();
            if !rationale.is_empty() {
                return OverallTier {
                    tier: stage.tier,
                    rationale,
                };
            }
        }
        OverallTier {
            tier: Tier::Low,
            rationale: Vec::new(),
        }
    }
}

/// Combine the three totals/bands and the two safety flags into one tier.
pub fn classify(
    phq_total: u32,
    phq_band: PhqBand,
    gad_band: GadBand,
    k10_band: K10Band,
    item9_flag: bool,
    asq_any_yes: bool,
) -> OverallTier {
    TierInputs {
        phq_total,
        phq_band,
        gad_band,
        k10_band,
        item9_flag,
        asq_any_yes,
    }
    .classify()
}

/// True when the PHQ-9A self-harm item was answered with anything above 0.
pub fn item9_flag(phq: &AnswerSet) -> bool {
    phq.get(ITEM9_INDEX).unwrap_or(0) >= 1
}
