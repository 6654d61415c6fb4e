// SPDX-License-Identifier: MPL-2.0
//! HTTP adapters built on `reqwest`.

use crate::application::port::{
    ConnectivityProbe, ContactError, ContactResponse, ContactSender, ContactSubmission, ProbeError,
};
use crate::error::Result;
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("Folio/", env!("CARGO_PKG_VERSION"));

/// Default timeout for the health-check request.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for contact form submissions.
pub const DEFAULT_CONTACT_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the shared client with explicit redirect policy and user agent.
pub fn build_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

// =============================================================================
// HttpProbe
// =============================================================================

/// Reachability probe issuing one uncached `GET`.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProbe {
    #[must_use]
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

fn classify_probe_error(err: &reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        ProbeError::Timeout
    } else if err.is_builder() {
        ProbeError::InvalidUrl(err.to_string())
    } else {
        ProbeError::Transport(err.to_string())
    }
}

impl ConnectivityProbe for HttpProbe {
    fn probe(&self, url: &str) -> impl Future<Output = std::result::Result<u16, ProbeError>> + Send {
        let request = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .timeout(self.timeout);
        async move {
            let response = request
                .send()
                .await
                .map_err(|err| classify_probe_error(&err))?;
            Ok(response.status().as_u16())
        }
    }
}

// =============================================================================
// HttpContactSender
// =============================================================================

/// JSON body returned by the contact endpoint. Only `message` is read.
#[derive(Debug, Deserialize)]
struct ReplyBody {
    #[serde(default)]
    message: Option<String>,
}

/// Parses the `message` field out of a response body, if present.
///
/// Bodies that are not JSON objects are treated as having no message.
fn reply_message(body: &str) -> Option<String> {
    serde_json::from_str::<ReplyBody>(body)
        .ok()
        .and_then(|reply| reply.message)
        .filter(|message| !message.trim().is_empty())
}

/// Posts contact submissions as JSON.
#[derive(Debug, Clone)]
pub struct HttpContactSender {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpContactSender {
    #[must_use]
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout: DEFAULT_CONTACT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContactSender for HttpContactSender {
    fn send(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = std::result::Result<ContactResponse, ContactError>> + Send {
        let request = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .timeout(self.timeout);
        async move {
            let response = request
                .send()
                .await
                .map_err(|err| ContactError::Transport(err.to_string()))?;
            let status = response.status().as_u16();
            // A body that fails to arrive still leaves us with a status.
            let body = response.text().await.unwrap_or_default();
            Ok(ContactResponse {
                status,
                message: reply_message(&body),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_message_reads_json_field() {
        assert_eq!(
            reply_message(r#"{"message":"Thanks, talk soon"}"#),
            Some("Thanks, talk soon".to_string())
        );
    }

    #[test]
    fn reply_message_ignores_non_json_bodies() {
        assert_eq!(reply_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(reply_message(""), None);
    }

    #[test]
    fn reply_message_ignores_blank_messages() {
        assert_eq!(reply_message(r#"{"message":"   "}"#), None);
        assert_eq!(reply_message(r#"{"ok":true}"#), None);
    }

    #[test]
    fn user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("Folio/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn probe_reports_invalid_url_without_network() {
        let client = build_client().expect("client should build");
        let probe = HttpProbe::new(client, Duration::from_secs(1));
        let result = probe.probe("not a url").await;
        assert!(matches!(result, Err(ProbeError::InvalidUrl(_))));
    }
}
