use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate figures sent to the risk prediction backend.
///
/// Field names are the wire names expected by `POST /predict_risk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskRequest {
    pub phq_total: u32,
    pub gad_total: u32,
    pub k10_total: u32,
    /// Raw value (0–3) of the ninth PHQ-9A item; 0 when unanswered.
    pub phq_item9: u8,
    pub asq_any_yes: bool,
}

/// Percentages returned by the prediction backend.
///
/// Each value is expected in 0–100 but the range is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskScores {
    pub suicidal_signal_pct: f64,
    pub depression_risk_pct: f64,
    pub stress_risk_pct: f64,
}
