use std::fmt;

use mindcheck_core::models::region::Region;
use mindcheck_instruments::labels::Locale;
use mindcheck_instruments::tier::OverallTier;
use mindcheck_instruments::{Instrument, InstrumentId};
use serde::Serialize;

use crate::session::{Session, SubmissionState};

/// Score line for one scored instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleSummary {
    pub instrument: InstrumentId,
    pub name: String,
    pub total: u32,
    pub max_total: u32,
    pub band: String,
    pub label: String,
}

/// Everything shown on the final step, computed from current answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub region: Option<Region>,
    pub phq9a: ScaleSummary,
    pub gad7: ScaleSummary,
    pub k10: ScaleSummary,
    pub phq_item9: u8,
    pub asq_any_yes: bool,
    pub overall: OverallTier,
    pub submission: SubmissionState,
}

impl Session {
    pub fn summary(&self, locale: Locale) -> Summary {
        let inputs = self.tier_inputs();
        let request = self.risk_request();

        Summary {
            region: self.region(),
            phq9a: scale(
                InstrumentId::Phq9a,
                request.phq_total,
                inputs.phq_band.as_str(),
                inputs.phq_band.label(locale),
            ),
            gad7: scale(
                InstrumentId::Gad7,
                request.gad_total,
                inputs.gad_band.as_str(),
                inputs.gad_band.label(locale),
            ),
            k10: scale(
                InstrumentId::K10,
                request.k10_total,
                inputs.k10_band.as_str(),
                inputs.k10_band.label(locale),
            ),
            phq_item9: request.phq_item9,
            asq_any_yes: request.asq_any_yes,
            overall: inputs.classify(),
            submission: self.submission().clone(),
        }
    }
}

fn scale(instrument: InstrumentId, total: u32, band: &str, label: &str) -> ScaleSummary {
    let definition: &dyn Instrument = instrument.definition();
    ScaleSummary {
        instrument,
        name: definition.name().to_string(),
        total,
        max_total: definition.max_total(),
        band: band.to_string(),
        label: label.to_string(),
    }
}

impl fmt::Display for ScaleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/{} - {}", self.name, self.total, self.max_total, self.label)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.region {
            Some(region) => writeln!(f, "Region: {region}")?,
            None => writeln!(f, "Region: -")?,
        }
        writeln!(f, "{}", self.phq9a)?;
        writeln!(f, "{}", self.gad7)?;
        writeln!(f, "{}", self.k10)?;
        writeln!(f, "Overall: {}", self.overall.tier.as_str().to_uppercase())?;
        if !self.overall.rationale.is_empty() {
            writeln!(f, "Rationale: {}", self.overall.rationale.join(", "))?;
        }

        match &self.submission {
            SubmissionState::Idle => {}
            SubmissionState::Loading => writeln!(f, "Risk scores: calculating...")?,
            SubmissionState::Succeeded { scores, .. } => {
                writeln!(f, "Suicide-related risk signal: {:.1}%", scores.suicidal_signal_pct)?;
                writeln!(f, "Depression risk: {:.1}%", scores.depression_risk_pct)?;
                writeln!(f, "Stress risk: {:.1}%", scores.stress_risk_pct)?;
            }
            SubmissionState::Failed { message, .. } => {
                writeln!(f, "Risk scores unavailable:\n{message}")?;
            }
        }

        write!(f, "This is a screening result, not a diagnosis.")
    }
}
