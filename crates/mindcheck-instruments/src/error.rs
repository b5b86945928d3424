use thiserror::Error;

use crate::InstrumentId;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument} has {len} items, no item at index {index}")]
    ItemOutOfRange {
        instrument: InstrumentId,
        index: usize,
        len: usize,
    },

    #[error("{value} is not a valid response for {instrument} item {index}")]
    InvalidResponse {
        instrument: InstrumentId,
        index: usize,
        value: u8,
    },

    #[error("{0} is answered yes/no and has no ordinal responses")]
    NotOrdinal(InstrumentId),
}
