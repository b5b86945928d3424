use std::path::Path;

use serde::Deserialize;

/// A respondent's answers, as read from a JSON file.
///
/// `asq` may be shorter than four items; missing items stay "no".
#[derive(Debug, Clone, Deserialize)]
pub struct Responses {
    pub region: String,
    pub phq9a: Vec<u8>,
    pub gad7: Vec<u8>,
    pub k10: Vec<u8>,
    #[serde(default)]
    pub asq: Vec<bool>,
}

pub fn load(path: &Path) -> eyre::Result<Responses> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read responses at {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&contents)?)
}
