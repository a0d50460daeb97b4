use crate::stage::StageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HumanIdError {
    /// The candidate does not match the validation grammar.
    #[error("identifier is malformed")]
    MalformedIdentifier,

    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}
