// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinError;

use crate::codec::{DecodeError, EncodeError};

/// Everything that may go wrong while querying a single nameserver.
///
/// The messages are meant to be shown to users as they are.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Error {
    #[error("{reason}")]
    Resolve { reason: String },
    #[error("Timeout")]
    Timeout,
    #[error("{reason}")]
    Transport { reason: String },
    #[error("Parse error: {source}")]
    Decode {
        #[from]
        source: DecodeError,
    },
    #[error("{source}")]
    Encode {
        #[from]
        source: EncodeError,
    },
    #[error("query has been cancelled")]
    CancelledError,
    #[error("query execution panicked")]
    RuntimePanicError,
}

impl Error {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Transport {
            reason: error.to_string(),
        }
    }
}

impl From<JoinError> for Error {
    fn from(error: JoinError) -> Self {
        if error.is_cancelled() {
            return Error::CancelledError;
        }
        Error::RuntimePanicError
    }
}
