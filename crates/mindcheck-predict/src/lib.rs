//! mindcheck-predict
//!
//! Client for the external risk prediction service. The service takes the
//! aggregate screening figures and answers with three model-derived
//! percentages; the model itself is opaque to this crate.

pub mod client;
pub mod config;
pub mod error;
pub mod response;

use std::future::Future;

use mindcheck_core::models::risk::{RiskRequest, RiskScores};

use error::PredictError;

/// Anything that can turn screening aggregates into risk percentages.
///
/// [`client::PredictClient`] is the HTTP implementation; sessions are
/// generic over this trait so they can run against a stand-in.
pub trait RiskPredictor: Send + Sync {
    fn predict(
        &self,
        request: &RiskRequest,
    ) -> impl Future<Output = Result<RiskScores, PredictError>> + Send;
}
