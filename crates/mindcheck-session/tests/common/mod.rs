#![allow(dead_code)]

use std::sync::Arc;

use mindcheck_core::models::region::Region;
use mindcheck_core::models::risk::{RiskRequest, RiskScores};
use mindcheck_instruments::InstrumentId;
use mindcheck_predict::RiskPredictor;
use mindcheck_predict::error::PredictError;
use mindcheck_session::session::{Advance, Session};
use mindcheck_session::step::Step;
use tokio::sync::Notify;

pub const SCORES: RiskScores = RiskScores {
    suicidal_signal_pct: 12.5,
    depression_risk_pct: 48.0,
    stress_risk_pct: 63.25,
};

/// Answers every call with the result of `respond`.
pub struct StubPredictor {
    pub respond: fn() -> Result<RiskScores, PredictError>,
}

impl StubPredictor {
    pub fn ok() -> Self {
        Self { respond: || Ok(SCORES) }
    }
}

impl RiskPredictor for StubPredictor {
    async fn predict(&self, _request: &RiskRequest) -> Result<RiskScores, PredictError> {
        (self.respond)()
    }
}

/// Holds every call until `release` is notified.
#[derive(Default)]
pub struct GatedPredictor {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl RiskPredictor for GatedPredictor {
    async fn predict(&self, _request: &RiskRequest) -> Result<RiskScores, PredictError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(SCORES)
    }
}

pub fn fill(session: &mut Session, instrument: InstrumentId, values: &[u8]) {
    for (i, &v) in values.iter().enumerate() {
        session.answer_item(instrument, i, v).unwrap();
    }
}

/// Walk a session to the final step with the given answers.
pub fn session_at_summary(session: &mut Session, phq: [u8; 9], gad: [u8; 7], k10: [u8; 10]) {
    session.select_region(Region::Seoul).unwrap();
    assert_eq!(session.advance().unwrap(), Advance::Moved(Step::Intro));
    assert_eq!(session.advance().unwrap(), Advance::Moved(Step::Phq9a));
    fill(session, InstrumentId::Phq9a, &phq);
    assert_eq!(session.advance().unwrap(), Advance::Moved(Step::Gad7));
    fill(session, InstrumentId::Gad7, &gad);
    assert_eq!(session.advance().unwrap(), Advance::Moved(Step::K10));
    fill(session, InstrumentId::K10, &k10);
    assert_eq!(session.advance().unwrap(), Advance::Moved(Step::AsqSummary));
}

pub const PHQ_MODERATE: [u8; 9] = [2, 2, 1, 1, 2, 1, 1, 2, 0];
pub const GAD_NONE: [u8; 7] = [0, 1, 0, 1, 0, 0, 1];
pub const K10_LOW: [u8; 10] = [1, 1, 1, 1, 2, 1, 1, 2, 1, 1];
