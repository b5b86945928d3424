use std::sync::Arc;

use mindcheck_predict::RiskPredictor;
use tokio::runtime::Handle;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::SessionError;
use crate::session::{Advance, Session, SubmissionState};

/// Shared, lock-protected access to one [`Session`].
///
/// The lock is released while a submission waits on the prediction
/// service, so other tasks can read the `loading` state and keep scoring;
/// the session itself rejects mutations until the submission finishes.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().await
    }

    pub async fn submission(&self) -> SubmissionState {
        self.inner.lock().await.submission().clone()
    }

    /// Submit without holding the lock during the prediction call.
    ///
    /// Dropping the returned future early (abort, timeout, `select!`)
    /// cancels the submission so the session can be retried.
    pub async fn submit<P: RiskPredictor>(
        &self,
        predictor: &P,
    ) -> Result<SubmissionState, SessionError> {
        let request = self.inner.lock().await.begin_submission()?;
        let pending = PendingSubmission {
            inner: Some(self.inner.clone()),
        };
        let result = predictor.predict(&request).await;

        let mut session = self.inner.lock().await;
        pending.disarm();
        Ok(session.finish_submission(result).clone())
    }

    /// Advance, submitting when the last step is confirmed.
    pub async fn advance<P: RiskPredictor>(&self, predictor: &P) -> Result<Advance, SessionError> {
        let advance = self.inner.lock().await.advance()?;
        if advance == Advance::Submit {
            self.submit(predictor).await?;
        }
        Ok(advance)
    }
}

/// Cancels the shared session's submission if dropped while armed.
struct PendingSubmission {
    inner: Option<Arc<Mutex<Session>>>,
}

impl PendingSubmission {
    fn disarm(mut self) {
        self.inner = None;
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        if let Ok(mut session) = inner.try_lock() {
            session.cancel_submission();
            return;
        }
        // Contended: finish the cancellation once the lock frees up.
        if let Ok(runtime) = Handle::try_current() {
            runtime.spawn(async move {
                inner.lock().await.cancel_submission();
            });
        }
    }
}
