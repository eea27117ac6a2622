// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Engine errors and their mapping onto protocol result codes.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::status::StatusCode;

/// Failure kinds reported by init/copy/destroy and the array engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("out of memory ({bytes} bytes requested)")]
    OutOfMemory { bytes: usize },

    #[error("internal error: {0}")]
    Internal(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },
}

impl Error {
    /// Result code reported on the wire for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::OutOfMemory { .. } => StatusCode::BAD_OUT_OF_MEMORY,
            Error::Internal(_) => StatusCode::BAD_INTERNAL_ERROR,
            Error::Encoding(_) => StatusCode::BAD_ENCODING_ERROR,
            Error::TypeMismatch { .. } => StatusCode::BAD_INVALID_ARGUMENT,
        }
    }

    pub(crate) fn oom(bytes: usize) -> Self {
        Error::OutOfMemory { bytes }
    }

    pub(crate) fn mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }
}

impl From<Error> for StatusCode {
    fn from(err: Error) -> Self {
        err.status_code()
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        // TryReserveError does not expose the requested size on stable.
        Error::OutOfMemory { bytes: 0 }
    }
}

impl From<std::fmt::Error> for Error {
    fn from(_: std::fmt::Error) -> Self {
        Error::Internal("formatting failed".into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
