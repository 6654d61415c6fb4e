// SPDX-License-Identifier: MPL-2.0
//! Backend reachability port.

use std::fmt;
use std::future::Future;

/// Errors raised when a probe never obtained an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The request could not be built (malformed URL).
    InvalidUrl(String),

    /// The request did not complete in time.
    Timeout,

    /// DNS, TLS, connection or other transport-level failure.
    Transport(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::InvalidUrl(url) => write!(f, "Invalid probe URL: {url}"),
            ProbeError::Timeout => write!(f, "Probe timed out"),
            ProbeError::Transport(msg) => write!(f, "Transport failure: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Checks whether a backend answers at all.
///
/// Any response carrying an HTTP status is a success, whatever the status.
/// Only a missing response is an error.
pub trait ConnectivityProbe: Send + Sync {
    /// Issues a single uncached request and returns the response status.
    fn probe(&self, url: &str) -> impl Future<Output = Result<u16, ProbeError>> + Send;
}
