//! Interpretation of prediction service response bodies.

use mindcheck_core::models::risk::RiskScores;
use serde_json::Value;

use crate::error::PredictError;

/// Upper bound on how much of a server-supplied body ends up in an error.
pub const MAX_DETAIL_CHARS: usize = 800;

/// Keep at most [`MAX_DETAIL_CHARS`] characters of `text`.
pub fn truncate_detail(text: &str) -> String {
    text.chars().take(MAX_DETAIL_CHARS).collect()
}

/// Parse a 2xx body into scores.
///
/// Each percentage may be a JSON number or a numeric string. A body that is
/// not JSON and a body with any field missing, null or non-numeric are
/// reported as different errors.
pub fn parse_scores(raw: &str) -> Result<RiskScores, PredictError> {
    let value: Value = serde_json::from_str(raw).map_err(|_| PredictError::InvalidJson {
        body: truncate_detail(raw),
    })?;

    let field = |name: &str| value.get(name).and_then(as_number);
    match (
        field("suicidal_signal_pct"),
        field("depression_risk_pct"),
        field("stress_risk_pct"),
    ) {
        (Some(suicidal_signal_pct), Some(depression_risk_pct), Some(stress_risk_pct)) => {
            Ok(RiskScores {
                suicidal_signal_pct,
                depression_risk_pct,
                stress_risk_pct,
            })
        }
        _ => Err(PredictError::MissingFields {
            body: truncate_detail(raw),
        }),
    }
}

/// Extract the message to surface for a non-2xx body.
///
/// Uses the `detail` field when the body is JSON and `detail` is set
/// (strings verbatim, anything else serialized), otherwise the raw body.
/// The result is truncated to [`MAX_DETAIL_CHARS`].
pub fn rejection_detail(raw: &str) -> String {
    let detail = match serde_json::from_str::<Value>(raw) {
        Ok(json) => match json.get("detail") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(other) if is_set(other) => other.to_string(),
            _ => raw.to_string(),
        },
        Err(_) => raw.to_string(),
    };
    truncate_detail(&detail)
}

fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (!n.is_nan()).then_some(n)
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}
