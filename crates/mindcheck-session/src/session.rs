use mindcheck_core::models::region::Region;
use mindcheck_core::models::risk::{RiskRequest, RiskScores};
use mindcheck_instruments::bands::{gad7_band, k10_band, phq9a_band};
use mindcheck_instruments::error::InstrumentError;
use mindcheck_instruments::instruments::phq9a::ITEM9_INDEX;
use mindcheck_instruments::scoring::{AnswerSet, AsqAnswers};
use mindcheck_instruments::tier::{OverallTier, TierInputs, item9_flag};
use mindcheck_instruments::InstrumentId;
use mindcheck_predict::RiskPredictor;
use mindcheck_predict::error::{FailureKind, PredictError};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::SessionError;
use crate::events::{EventSink, SessionEvent, TracingSink};
use crate::step::Step;

/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Loading,
    Succeeded {
        scores: RiskScores,
        completed_at: jiff::Timestamp,
    },
    Failed {
        kind: FailureKind,
        message: String,
    },
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }
}

/// Result of a successful [`Session::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward to this step.
    Moved(Step),
    /// The last step is complete; the caller must now submit.
    Submit,
}

/// One respondent's pass through the questionnaire.
pub struct Session {
    id: Uuid,
    step: Step,
    region: Option<Region>,
    phq9a: AnswerSet,
    gad7: AnswerSet,
    k10: AnswerSet,
    asq: AsqAnswers,
    submission: SubmissionState,
    events: Box<dyn EventSink>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session whose events only go to the log.
    pub fn new() -> Self {
        Self::with_events(TracingSink)
    }

    pub fn with_events(events: impl EventSink + 'static) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "session started");
        Self {
            id,
            step: Step::RegionSelect,
            region: None,
            phq9a: AnswerSet::new(InstrumentId::Phq9a),
            gad7: AnswerSet::new(InstrumentId::Gad7),
            k10: AnswerSet::new(InstrumentId::K10),
            asq: AsqAnswers::new(),
            submission: SubmissionState::Idle,
            events: Box::new(events),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn answers(&self, instrument: InstrumentId) -> Option<&AnswerSet> {
        match instrument {
            InstrumentId::Phq9a => Some(&self.phq9a),
            InstrumentId::Gad7 => Some(&self.gad7),
            InstrumentId::K10 => Some(&self.k10),
            InstrumentId::Asq => None,
        }
    }

    pub fn asq(&self) -> &AsqAnswers {
        &self.asq
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    // ── Answer selection ────────────────────────────────────────────────

    pub fn select_region(&mut self, region: Region) -> Result<(), SessionError> {
        self.ensure_active(Step::RegionSelect)?;
        self.region = Some(region);
        debug!(session = %self.id, region = region.id(), "region selected");
        Ok(())
    }

    /// Record an ordinal response for PHQ-9A, GAD-7 or K10.
    pub fn answer_item(
        &mut self,
        instrument: InstrumentId,
        index: usize,
        value: u8,
    ) -> Result<(), SessionError> {
        if instrument == InstrumentId::Asq {
            return Err(InstrumentError::NotOrdinal(instrument).into());
        }
        self.ensure_active(Step::for_instrument(instrument))?;

        let answers = match instrument {
            InstrumentId::Phq9a => &mut self.phq9a,
            InstrumentId::Gad7 => &mut self.gad7,
            _ => &mut self.k10,
        };
        answers.set(index, value)?;
        debug!(session = %self.id, %instrument, index, value, "item answered");
        Ok(())
    }

    /// Record an ASQ response. Every "yes" emits [`SessionEvent::CrisisHelp`]
    /// immediately, whatever the state of the rest of the questionnaire.
    pub fn answer_asq(&mut self, index: usize, yes: bool) -> Result<(), SessionError> {
        self.ensure_active(Step::AsqSummary)?;
        self.asq.set(index, yes)?;
        if yes {
            self.events.emit(SessionEvent::CrisisHelp {
                session_id: self.id,
                item: index,
            });
        }
        Ok(())
    }

    fn ensure_active(&self, expected: Step) -> Result<(), SessionError> {
        if self.submission.is_loading() {
            return Err(SessionError::SubmissionInFlight);
        }
        if self.step != expected {
            return Err(SessionError::WrongStep {
                expected,
                current: self.step,
            });
        }
        Ok(())
    }

    // ── Navigation ──────────────────────────────────────────────────────

    pub fn is_complete(&self, step: Step) -> bool {
        match step {
            Step::RegionSelect => self.region.is_some(),
            Step::Intro | Step::AsqSummary => true,
            Step::Phq9a => self.phq9a.is_complete(),
            Step::Gad7 => self.gad7.is_complete(),
            Step::K10 => self.k10.is_complete(),
        }
    }

    /// Move forward if the current step is complete.
    ///
    /// On the last step this changes nothing and returns [`Advance::Submit`];
    /// the caller must then call [`Session::submit`] itself.
    /// [`SessionHandle::advance`](crate::handle::SessionHandle::advance)
    /// does both.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.submission.is_loading() {
            return Err(SessionError::SubmissionInFlight);
        }
        if !self.is_complete(self.step) {
            debug!(session = %self.id, step = self.step.index(), "advance blocked: step incomplete");
            return Err(SessionError::Incomplete { step: self.step });
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                info!(session = %self.id, step = next.index(), "advanced");
                Ok(Advance::Moved(next))
            }
            None => Ok(Advance::Submit),
        }
    }

    /// Move back one step. Never checks completion.
    pub fn retreat(&mut self) -> Result<Step, SessionError> {
        if self.submission.is_loading() {
            return Err(SessionError::SubmissionInFlight);
        }
        let prev = self.step.prev().ok_or(SessionError::AtFirstStep)?;
        self.step = prev;
        info!(session = %self.id, step = prev.index(), "retreated");
        Ok(prev)
    }

    // ── Scoring ─────────────────────────────────────────────────────────

    /// Payload for the prediction service, from the answers present now.
    pub fn risk_request(&self) -> RiskRequest {
        RiskRequest {
            phq_total: self.phq9a.total(),
            gad_total: self.gad7.total(),
            k10_total: self.k10.total(),
            phq_item9: self.phq9a.get(ITEM9_INDEX).unwrap_or(0),
            asq_any_yes: self.asq.any_yes(),
        }
    }

    pub fn tier_inputs(&self) -> TierInputs {
        let phq_total = self.phq9a.total();
        TierInputs {
            phq_total,
            phq_band: phq9a_band(phq_total),
            gad_band: gad7_band(self.gad7.total()),
            k10_band: k10_band(self.k10.total()),
            item9_flag: item9_flag(&self.phq9a),
            asq_any_yes: self.asq.any_yes(),
        }
    }

    pub fn overall_tier(&self) -> OverallTier {
        self.tier_inputs().classify()
    }

    // ── Submission ──────────────────────────────────────────────────────

    /// Enter `loading` and hand back the payload to send.
    pub fn begin_submission(&mut self) -> Result<RiskRequest, SessionError> {
        if self.submission.is_loading() {
            warn!(session = %self.id, "submission rejected: already in flight");
            return Err(SessionError::SubmissionInFlight);
        }
        let request = self.risk_request();
        self.submission = SubmissionState::Loading;
        info!(
            session = %self.id,
            phq_total = request.phq_total,
            gad_total = request.gad_total,
            k10_total = request.k10_total,
            "submission started"
        );
        Ok(request)
    }

    /// Leave `loading` with the outcome of the external call. Outside of
    /// `loading` the result is discarded and the state is left as it is.
    pub fn finish_submission(
        &mut self,
        result: Result<RiskScores, PredictError>,
    ) -> &SubmissionState {
        if !self.submission.is_loading() {
            debug!(session = %self.id, "submission result ignored: nothing in flight");
            return &self.submission;
        }
        self.submission = match result {
            Ok(scores) => {
                info!(session = %self.id, "submission succeeded");
                SubmissionState::Succeeded {
                    scores,
                    completed_at: jiff::Timestamp::now(),
                }
            }
            Err(e) => {
                warn!(session = %self.id, kind = ?e.kind(), error = %e, "submission failed");
                SubmissionState::Failed {
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        };
        &self.submission
    }

    /// Abandon the submission in flight, leaving a retryable transport
    /// failure. Returns `false` when nothing was in flight.
    pub fn cancel_submission(&mut self) -> bool {
        if !self.submission.is_loading() {
            return false;
        }
        warn!(session = %self.id, "submission cancelled");
        self.submission = SubmissionState::Failed {
            kind: FailureKind::Transport,
            message: SUBMISSION_CANCELLED.to_string(),
        };
        true
    }

    /// Submit the current answers and wait for the outcome.
    ///
    /// Dropping the returned future before it completes cancels the
    /// submission instead of leaving the session in `loading`.
    pub async fn submit<P: RiskPredictor>(
        &mut self,
        predictor: &P,
    ) -> Result<&SubmissionState, SessionError> {
        let request = self.begin_submission()?;
        let pending = PendingSubmission {
            session: &mut *self,
            armed: true,
        };
        let result = predictor.predict(&request).await;
        pending.disarm();
        Ok(self.finish_submission(result))
    }
}

/// Failure message left behind by [`Session::cancel_submission`].
pub const SUBMISSION_CANCELLED: &str = "submission cancelled";

/// Cancels the borrowed session's submission if dropped while armed.
struct PendingSubmission<'a> {
    session: &'a mut Session,
    armed: bool,
}

impl PendingSubmission<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.session.cancel_submission();
        }
    }
}
