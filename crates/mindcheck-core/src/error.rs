use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown region: {0}")]
    UnknownRegion(String),
}
