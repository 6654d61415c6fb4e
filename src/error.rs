// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Covers failures outside the boot pipeline: the settings file, the async
//! runtime and the HTTP client. Boot failures are reported through
//! [`BootError`](crate::boot::BootError) instead, since the boot screen
//! shows them to the user.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A file or the async runtime could not be accessed.
    Io(String),
    /// `settings.toml` could not be parsed or written.
    Settings(String),
    /// The HTTP client could not be built.
    HttpClient(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(reason) => write!(f, "I/O failure: {reason}"),
            Error::Settings(reason) => write!(f, "Invalid settings: {reason}"),
            Error::HttpClient(reason) => write!(f, "HTTP client unavailable: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Settings(err.message().to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Settings(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::HttpClient(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
