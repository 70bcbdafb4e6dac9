use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::InvalidParams(msg) | FrameworkError::Encode(msg) => {
                ProductError::InvalidProduct(msg)
            }
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
