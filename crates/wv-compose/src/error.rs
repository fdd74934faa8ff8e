use thiserror::Error;
use wv_behavior::BehaviorError;
use wv_view::ViewError;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("view error: {0}")]
    View(#[from] ViewError),
}

pub type ComposeResult<T> = Result<T, ComposeError>;
