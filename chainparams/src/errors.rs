use thiserror::Error;

use crate::network::NetworkError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error(transparent)]
    UnknownNetwork(#[from] NetworkError),

    #[error("alternative core params leave required fields undefined: {}", .missing.join(", "))]
    IncompleteCoreParams { missing: Vec<&'static str> },

    #[error("alternative chain params leave required fields undefined: {}", .missing.join(", "))]
    IncompleteChainParams { missing: Vec<&'static str> },

    #[error("alternative chain params are not built over the supplied core params")]
    DetachedCoreParams,
}

pub type SelectionResult<T> = std::result::Result<T, SelectionError>;
