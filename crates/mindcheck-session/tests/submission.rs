mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{
    GAD_NONE, GatedPredictor, K10_LOW, PHQ_MODERATE, SCORES, StubPredictor, session_at_summary,
};
use mindcheck_instruments::InstrumentId;
use mindcheck_instruments::labels::Locale;
use mindcheck_instruments::tier::Tier;
use mindcheck_predict::error::{FailureKind, PredictError};
use mindcheck_predict::response::parse_scores;
use mindcheck_session::error::SessionError;
use mindcheck_session::handle::SessionHandle;
use mindcheck_session::session::{Advance, SUBMISSION_CANCELLED, Session, SubmissionState};
use mindcheck_session::step::Step;
use pretty_assertions::assert_eq;

fn ready_session() -> Session {
    let mut session = Session::new();
    session_at_summary(&mut session, PHQ_MODERATE, GAD_NONE, K10_LOW);
    session
}

#[tokio::test]
async fn successful_submission_stores_scores() {
    let mut session = ready_session();
    assert_eq!(session.submission(), &SubmissionState::Idle);

    let state = session.submit(&StubPredictor::ok()).await.unwrap().clone();
    match state {
        SubmissionState::Succeeded { scores, .. } => assert_eq!(scores, SCORES),
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_stress_field_is_a_format_failure() {
    let mut session = ready_session();
    let predictor = StubPredictor {
        respond: || parse_scores(r#"{"suicidal_signal_pct": 1.0, "depression_risk_pct": 2.0}"#),
    };

    let state = session.submit(&predictor).await.unwrap().clone();
    match state {
        SubmissionState::Failed { kind, message } => {
            assert_eq!(kind, FailureKind::ResponseFormat);
            assert!(message.starts_with("missing/NaN fields in response"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_submission_keeps_answers_and_can_retry() {
    let mut session = ready_session();
    let rejecting = StubPredictor {
        respond: || {
            Err(PredictError::Rejected {
                status: 500,
                detail: "Models not loaded".to_string(),
            })
        },
    };

    let state = session.submit(&rejecting).await.unwrap().clone();
    assert_eq!(
        state,
        SubmissionState::Failed {
            kind: FailureKind::Rejected,
            message: "API 500\nModels not loaded".to_string(),
        }
    );
    assert_eq!(session.answers(InstrumentId::Phq9a).unwrap().total(), 12);

    let retried = session.submit(&StubPredictor::ok()).await.unwrap();
    assert!(matches!(retried, SubmissionState::Succeeded { .. }));
}

#[tokio::test]
async fn loading_is_observable_and_blocks_reentry() {
    let handle = SessionHandle::new(ready_session());
    let predictor = Arc::new(GatedPredictor::default());

    let task = {
        let handle = handle.clone();
        let predictor = predictor.clone();
        tokio::spawn(async move { handle.submit(&*predictor).await })
    };

    predictor.started.notified().await;
    assert!(handle.submission().await.is_loading());

    let second = handle.submit(&*predictor).await;
    assert!(matches!(second, Err(SessionError::SubmissionInFlight)));

    {
        let mut session = handle.lock().await;
        assert!(matches!(session.answer_asq(0, false), Err(SessionError::SubmissionInFlight)));
        assert!(matches!(session.retreat(), Err(SessionError::SubmissionInFlight)));
        assert!(matches!(session.advance(), Err(SessionError::SubmissionInFlight)));
        // Scoring stays available while loading.
        assert_eq!(session.overall_tier().tier, Tier::Mid);
        assert_eq!(session.risk_request().phq_total, 12);
    }

    predictor.release.notify_one();
    let state = task.await.unwrap().unwrap();
    assert!(matches!(state, SubmissionState::Succeeded { .. }));
    assert!(!handle.submission().await.is_loading());
}

#[tokio::test]
async fn advancing_past_last_step_submits() {
    let handle = SessionHandle::new(ready_session());

    let advance = handle.advance(&StubPredictor::ok()).await.unwrap();
    assert_eq!(advance, Advance::Submit);
    assert!(matches!(
        handle.submission().await,
        SubmissionState::Succeeded { .. }
    ));
}

#[tokio::test]
async fn summary_reflects_answers_and_outcome() {
    let mut session = ready_session();
    session.submit(&StubPredictor::ok()).await.unwrap();

    let summary = session.summary(Locale::En);
    assert_eq!(summary.phq9a.total, 12);
    assert_eq!(summary.phq9a.max_total, 27);
    assert_eq!(summary.phq9a.band, "moderate");
    assert_eq!(summary.phq9a.label, "Moderate");
    assert_eq!(summary.gad7.total, 3);
    assert_eq!(summary.k10.total, 12);
    assert_eq!(summary.k10.label, "Low");
    assert_eq!(summary.overall.tier, Tier::Mid);
    assert_eq!(summary.overall.rationale, vec!["PHQ-9A moderate".to_string()]);

    let text = summary.to_string();
    assert!(text.contains("Region: 서울특별시"));
    assert!(text.contains("PHQ-9A: 12/27 - Moderate"));
    assert!(text.contains("Overall: MID"));
    assert!(text.contains("Rationale: PHQ-9A moderate"));
    assert!(text.contains("Stress risk: 63.2%") || text.contains("Stress risk: 63.3%"));

    let korean = session.summary(Locale::Ko);
    assert_eq!(korean.phq9a.label, "중등도");
}

#[tokio::test]
async fn aborted_submission_can_be_retried() {
    let handle = SessionHandle::new(ready_session());
    let predictor = Arc::new(GatedPredictor::default());

    let task = {
        let handle = handle.clone();
        let predictor = predictor.clone();
        tokio::spawn(async move { handle.submit(&*predictor).await })
    };

    predictor.started.notified().await;
    assert!(handle.submission().await.is_loading());

    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());

    assert_eq!(
        handle.submission().await,
        SubmissionState::Failed {
            kind: FailureKind::Transport,
            message: SUBMISSION_CANCELLED.to_string(),
        }
    );

    {
        let mut session = handle.lock().await;
        assert_eq!(session.retreat().unwrap(), Step::K10);
        assert_eq!(session.advance().unwrap(), Advance::Moved(Step::AsqSummary));
    }

    let state = handle.submit(&StubPredictor::ok()).await.unwrap();
    assert!(matches!(state, SubmissionState::Succeeded { .. }));
}

#[tokio::test]
async fn timed_out_submission_can_be_retried() {
    let mut session = ready_session();
    let predictor = GatedPredictor::default();

    let outcome = tokio::time::timeout(Duration::from_millis(20), session.submit(&predictor)).await;
    assert!(outcome.is_err());

    assert!(matches!(
        session.submission(),
        SubmissionState::Failed {
            kind: FailureKind::Transport,
            ..
        }
    ));

    let retried = session.submit(&StubPredictor::ok()).await.unwrap();
    assert!(matches!(retried, SubmissionState::Succeeded { .. }));
}

#[tokio::test]
async fn result_without_submission_in_flight_is_ignored() {
    let mut session = ready_session();
    assert_eq!(session.finish_submission(Ok(SCORES)), &SubmissionState::Idle);
    assert!(!session.cancel_submission());

    session.submit(&StubPredictor::ok()).await.unwrap();

    let late = Err(PredictError::Rejected {
        status: 500,
        detail: "late".to_string(),
    });
    assert!(matches!(
        session.finish_submission(late),
        SubmissionState::Succeeded { .. }
    ));
    assert!(!session.cancel_submission());
}
