//! Error types.
//!
//! Two families live here:
//!
//! - [`ApiError`]: per-request failures (unparsable request target, bad
//!   query parameters, unknown post, restore conflict). Each one maps to a
//!   status code and is answered with an empty body; it never reaches the
//!   transport.
//! - [`Error`]: infrastructure failures, i.e. parsing the listen address,
//!   binding the port or accepting a connection.

use std::net::AddrParseError;

use thiserror::Error;

use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// A request that a handler refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// A required query parameter is missing or not numeric.
    #[error("invalid or missing query parameter `{0}`")]
    Validation(&'static str),

    /// The request target does not resolve to a URL.
    #[error("malformed request target")]
    MalformedTarget,

    /// No post (or no active post) matches the requested id.
    #[error("post not found")]
    NotFound,

    /// Restore was requested on a post that is not removed.
    #[error("post is already active")]
    Conflict,
}

impl ApiError {
    /// The status code this error is answered with.
    pub fn status(self) -> Status {
        match self {
            Self::Validation(_) | Self::MalformedTarget | Self::Conflict => Status::BadRequest,
            Self::NotFound => Status::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Response::status(self.status())
    }
}

/// The error type returned by the server's fallible operations.
///
/// Application-level failures are expressed as [`ApiError`] and turned into
/// responses; this type only surfaces failures that stop the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Binding the listener or accepting a connection failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// The configured listen address is not a valid `host:port`.
    #[error("invalid listen address: {0}")]
    Addr(#[from] AddrParseError),
}
