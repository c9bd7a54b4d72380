// error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EchoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot read {}: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EchoError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, EchoError::InvalidArgument(_))
    }
}
