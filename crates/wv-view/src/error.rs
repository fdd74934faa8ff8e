use thiserror::Error;
use wv_behavior::BehaviorError;
use wv_core::WeaveError;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("event key error: {0}")]
    Key(#[from] WeaveError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("handler error: {0}")]
    Handler(String),
}

pub type ViewResult<T> = Result<T, ViewError>;
