//! Error types for plan computation.
//!
//! - `InvalidArgument`: the caller's request can't be planned (exit code 2 at the CLI).
//! - `ComputationFailed`: a collaborator failed mid-run; the whole plan is aborted (exit code 1).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    /// Rejected before any work started; no partial plan exists.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The profit collaborator failed or returned garbage for one violation.
    #[error("computation failed for artefact {artefact}")]
    ComputationFailed {
        artefact: String,
        #[source]
        source: anyhow::Error,
    },
}

impl PlanError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PlanError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns true if the caller supplied an unplannable request.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PlanError::InvalidArgument { .. })
    }

    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            PlanError::InvalidArgument { .. } => 2,
            PlanError::ComputationFailed { .. } => 1,
        }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
