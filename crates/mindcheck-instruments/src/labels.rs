//! Display labels for severity bands.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::bands::{GadBand, K10Band, PhqBand};

/// Language used for respondent-facing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl PhqBand {
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ko, PhqBand::None) => "정상/최소",
            (Locale::Ko, PhqBand::Mild) => "경도",
            (Locale::Ko, PhqBand::Moderate) => "중등도",
            (Locale::Ko, PhqBand::ModeratelySevere) => "중등도-중증",
            (Locale::Ko, PhqBand::Severe) => "중증",
            (Locale::En, PhqBand::None) => "None/minimal",
            (Locale::En, PhqBand::Mild) => "Mild",
            (Locale::En, PhqBand::Moderate) => "Moderate",
            (Locale::En, PhqBand::ModeratelySevere) => "Moderately severe",
            (Locale::En, PhqBand::Severe) => "Severe",
        }
    }
}

impl GadBand {
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ko, GadBand::None) => "정상/최소",
            (Locale::Ko, GadBand::Mild) => "경도",
            (Locale::Ko, GadBand::Moderate) => "중등도",
            (Locale::Ko, GadBand::Severe) => "중증",
            (Locale::En, GadBand::None) => "None/minimal",
            (Locale::En, GadBand::Mild) => "Mild",
            (Locale::En, GadBand::Moderate) => "Moderate",
            (Locale::En, GadBand::Severe) => "Severe",
        }
    }
}

impl K10Band {
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ko, K10Band::Low) => "낮음",
            (Locale::Ko, K10Band::Medium) => "중간",
            (Locale::Ko, K10Band::High) => "높음",
            (Locale::Ko, K10Band::VeryHigh) => "매우 높음",
            (Locale::En, K10Band::Low) => "Low",
            (Locale::En, K10Band::Medium) => "Medium",
            (Locale::En, K10Band::High) => "High",
            (Locale::En, K10Band::VeryHigh) => "Very high",
        }
    }
}
