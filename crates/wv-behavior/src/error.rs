use thiserror::Error;
use wv_core::WeaveError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error(
        "no constructor for behavior {key:?}: supply one in the declaration \
         or register the key with a BehaviorLookup (see BehaviorRegistry)"
    )]
    MissingLookup { key: String },

    #[error("behavior has no handler method {method:?}")]
    UnknownHandler { method: String },

    #[error("declaration parse error: {0}")]
    Parse(String),

    #[error("event key error: {0}")]
    Key(#[from] WeaveError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
