use thiserror::Error;
use uuid::Uuid;
use crate::errors::BridgeError;

#[derive(Debug, Error)]
pub enum PollerError {
    #[error("cancellation poller has been stopped, analysis {0} rejected")]
    Rejected(Uuid),

    #[error("cancellation poller is not running")]
    Stopped,

    #[error("failed to start cancellation poller runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl From<PollerError> for BridgeError {
    fn from(error: PollerError) -> Self {
        match error {
            PollerError::Rejected(analysis_id) => BridgeError::RegistrationRejected {
                analysis_id: analysis_id.to_string(),
                reason: "cancellation poller has been stopped".to_string(),
            },
            other => BridgeError::system_error("cancellation polling", &other.to_string()),
        }
    }
}
