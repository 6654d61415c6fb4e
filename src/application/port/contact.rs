// SPDX-License-Identifier: MPL-2.0
//! Contact form submission port.
//!
//! The sender only moves bytes. Turning a response into a user-facing
//! outcome is done by [`crate::contact::interpret_response`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// Payload posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Raw response from the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactResponse {
    /// HTTP status code.
    pub status: u16,
    /// `message` field of the JSON body, when the body had one.
    pub message: Option<String>,
}

impl ContactResponse {
    /// Returns whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The submission never received a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The endpoint could not be reached.
    Transport(String),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::Transport(msg) => write!(f, "Contact request failed: {msg}"),
        }
    }
}

impl std::error::Error for ContactError {}

/// Delivers contact form submissions.
pub trait ContactSender: Send + Sync {
    /// Posts the submission and returns the raw response.
    fn send(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<ContactResponse, ContactError>> + Send;
}
