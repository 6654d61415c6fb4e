// SPDX-License-Identifier: MPL-2.0
//! Contact form state.
//!
//! The form validates the email locally, hands a [`ContactSubmission`] to a
//! [`ContactSender`](crate::application::port::ContactSender), and turns the
//! raw response into a message the user can read.

use crate::application::port::{ContactError, ContactResponse, ContactSubmission};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").ok());

/// Loose email check: something, `@`, something, `.`, something.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// Text shown under the form after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Message key resolved through i18n.
    Key(&'static str),
    /// Message supplied by the server, shown verbatim.
    Server(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Sent(Feedback),
    Failed(Feedback),
}

/// Maps the outcome of a submission to what the user sees.
///
/// - 2xx: the server's message, or a default thank-you
/// - 5xx: a generic server error, whatever the body says
/// - other statuses: the server's message, or a generic rejection
/// - no response: a connection error
#[must_use]
pub fn interpret_response(result: Result<ContactResponse, ContactError>) -> SubmitState {
    match result {
        Ok(response) if response.is_success() => SubmitState::Sent(
            response
                .message
                .map_or(Feedback::Key("contact-sent"), Feedback::Server),
        ),
        Ok(response) if response.status >= 500 => {
            SubmitState::Failed(Feedback::Key("contact-server-error"))
        }
        Ok(response) => SubmitState::Failed(
            response
                .message
                .map_or(Feedback::Key("contact-rejected"), Feedback::Server),
        ),
        Err(ContactError::Transport(_)) => {
            SubmitState::Failed(Feedback::Key("contact-connection-error"))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    state: SubmitState,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Updates a field. Any previous submit outcome is cleared.
    pub fn edit(&mut self, field: Field, value: String) {
        if self.state != SubmitState::Idle {
            self.state = SubmitState::Idle;
        }
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Starts a submission.
    ///
    /// Returns the payload to send, or `None` when a submission is already in
    /// flight or the email is invalid (the form then shows the error).
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_submitting() {
            return None;
        }
        if !is_valid_email(&self.email) {
            self.state = SubmitState::Failed(Feedback::Key("contact-invalid-email"));
            return None;
        }
        self.state = SubmitState::Submitting;
        Some(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Records the outcome of the submission started by [`begin_submit`].
    /// A successful send clears the fields.
    ///
    /// [`begin_submit`]: Self::begin_submit
    pub fn finish(&mut self, result: Result<ContactResponse, ContactError>) {
        self.state = interpret_response(result);
        if matches!(self.state, SubmitState::Sent(_)) {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, message: Option<&str>) -> Result<ContactResponse, ContactError> {
        Ok(ContactResponse {
            status,
            message: message.map(str::to_string),
        })
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Ada".into());
        form.edit(Field::Email, "ada@example.com".into());
        form.edit(Field::Message, "Hello there".into());
        form
    }

    #[test]
    fn email_pattern_accepts_plain_addresses() {
        assert!(is_valid_email("you@gmail.com"));
        assert!(is_valid_email("first.last@sub.domain.io"));
    }

    #[test]
    fn email_pattern_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("@ ."));
    }

    #[test]
    fn success_uses_server_message_when_present() {
        assert_eq!(
            interpret_response(response(200, Some("Got it!"))),
            SubmitState::Sent(Feedback::Server("Got it!".into()))
        );
        assert_eq!(
            interpret_response(response(201, None)),
            SubmitState::Sent(Feedback::Key("contact-sent"))
        );
    }

    #[test]
    fn server_errors_hide_the_body() {
        assert_eq!(
            interpret_response(response(502, Some("upstream exploded"))),
            SubmitState::Failed(Feedback::Key("contact-server-error"))
        );
    }

    #[test]
    fn client_errors_surface_server_message() {
        assert_eq!(
            interpret_response(response(422, Some("Message is required"))),
            SubmitState::Failed(Feedback::Server("Message is required".into()))
        );
        assert_eq!(
            interpret_response(response(400, None)),
            SubmitState::Failed(Feedback::Key("contact-rejected"))
        );
    }

    #[test]
    fn transport_failure_is_a_connection_error() {
        assert_eq!(
            interpret_response(Err(ContactError::Transport("dns".into()))),
            SubmitState::Failed(Feedback::Key("contact-connection-error"))
        );
    }

    #[test]
    fn invalid_email_blocks_submission() {
        let mut form = filled_form();
        form.edit(Field::Email, "not-an-email".into());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(
            form.state(),
            &SubmitState::Failed(Feedback::Key("contact-invalid-email"))
        );
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut form = filled_form();
        let submission = form.begin_submit().expect("valid form submits");
        assert_eq!(submission.email, "ada@example.com");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn editing_resets_outcome_to_idle() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish(response(400, None));
        form.edit(Field::Message, "Hello again".into());
        assert_eq!(form.state(), &SubmitState::Idle);
    }

    #[test]
    fn successful_send_clears_fields() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish(response(200, None));
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.value(Field::Message), "");
    }

    #[test]
    fn failed_send_keeps_fields() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish(Err(ContactError::Transport("timeout".into())));
        assert_eq!(form.value(Field::Email), "ada@example.com");
    }
}
