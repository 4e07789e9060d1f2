use crate::{ClientError, ErrorKind};

use mm_core::CoreError;

use serde::Serialize;

/// An inline error shown on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageError {
    pub kind: ErrorKind,
    pub message: String,
}

impl PageError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&ClientError> for PageError {
    fn from(err: &ClientError) -> Self {
        Self::new(err.kind(), err.user_message())
    }
}

impl From<ClientError> for PageError {
    fn from(err: ClientError) -> Self {
        Self::from(&err)
    }
}

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        Self::new(ErrorKind::Validation, err.user_message())
    }
}
