use mindcheck_instruments::error::InstrumentError;
use thiserror::Error;

use crate::step::Step;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{step} is not complete: answer every question before continuing")]
    Incomplete { step: Step },

    #[error("already at the first step")]
    AtFirstStep,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("{expected} is not the active step (currently at {current})")]
    WrongStep { expected: Step, current: Step },

    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}
