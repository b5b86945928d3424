//! Severity bands.
//!
//! Each instrument partitions the non-negative totals into ordered bands by
//! fixed inclusive upper bounds. Totals beyond the instrument maximum still
//! classify through the last arm.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// PHQ-9A depression severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PhqBand {
    None,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

/// GAD-7 anxiety severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GadBand {
    None,
    Mild,
    Moderate,
    Severe,
}

/// K10 psychological distress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum K10Band {
    Low,
    Medium,
    High,
    VeryHigh,
}

pub fn phq9a_band(total: u32) -> PhqBand {
    match total {
        0..=4 => PhqBand::None,
        5..=9 => PhqBand::Mild,
        10..=14 => PhqBand::Moderate,
        15..=19 => PhqBand::ModeratelySevere,
        _ => PhqBand::Severe,
    }
}

pub fn gad7_band(total: u32) -> GadBand {
    match total {
        0..=4 => GadBand::None,
        5..=9 => GadBand::Mild,
        10..=14 => GadBand::Moderate,
        _ => GadBand::Severe,
    }
}

pub fn k10_band(total: u32) -> K10Band {
    match total {
        0..=15 => K10Band::Low,
        16..=21 => K10Band::Medium,
        22..=29 => K10Band::High,
        _ => K10Band::VeryHigh,
    }
}

impl PhqBand {
    /// Snake-case id, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            PhqBand::None => "none",
            PhqBand::Mild => "mild",
            PhqBand::Moderate => "moderate",
            PhqBand::ModeratelySevere => "moderately_severe",
            PhqBand::Severe => "severe",
        }
    }
}

impl GadBand {
    pub fn as_str(self) -> &'static str {
        match self {
            GadBand::None => "none",
            GadBand::Mild => "mild",
            GadBand::Moderate => "moderate",
            GadBand::Severe => "severe",
        }
    }
}

impl K10Band {
    pub fn as_str(self) -> &'static str {
        match self {
            K10Band::Low => "low",
            K10Band::Medium => "medium",
            K10Band::High => "high",
            K10Band::VeryHigh => "very_high",
        }
    }
}
