use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The input's `name`/`id` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

/// The values currently typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Presence check only, matching the browser's `required` attribute.
    /// Email format is left to the `type="email"` input.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    /// Text for the status banner, if one should be shown.
    pub fn banner(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Success(s) | SubmissionStatus::Error(s) => Some(s),
            SubmissionStatus::Idle | SubmissionStatus::Pending => None,
        }
    }
}

/// Every way a relay call can fail. They all surface to the visitor as the
/// same generic failure message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay transport failed: {0}")]
    Transport(String),
    #[error("relay rejected the message with status {status}")]
    Rejected { status: http::StatusCode },
    #[error("contact server function failed: {0}")]
    Server(String),
    #[error("no mail relay is available")]
    Unavailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(
        "missing required fields: {}",
        .0.iter().map(Field::name).collect::<Vec<_>>().join(", ")
    )]
    Incomplete(Vec<Field>),
    #[error("a submission is already in flight")]
    InFlight,
}

/// Delivers a contact message to the site owner.
pub trait MailRelay {
    fn send(&self, form: &ContactForm) -> impl Future<Output = Result<(), RelayError>> + Send;
}

/// Drives one submission at a time through Idle -> Pending -> Success/Error.
///
/// The browser can't hold `&mut self` across the relay call, so the flow is
/// split into [`begin`](Self::begin) and [`finish`](Self::finish);
/// [`submit`](Self::submit) runs both around a relay.
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    status: SubmissionStatus,
}

impl SubmissionController {
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// The send button is disabled while a submission is in flight.
    pub fn trigger_enabled(&self) -> bool {
        !self.is_pending()
    }

    /// Marks the controller pending and returns the payload to relay.
    ///
    /// Rejected without touching the status when a submission is already in
    /// flight or a required field is empty.
    pub fn begin(&mut self, form: &ContactForm) -> Result<ContactForm, SubmitError> {
        if self.is_pending() {
            return Err(SubmitError::InFlight);
        }
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitError::Incomplete(missing));
        }
        self.status = SubmissionStatus::Pending;
        Ok(form.clone())
    }

    /// Records the relay outcome. Ignored unless a submission is pending.
    pub fn finish(&mut self, outcome: Result<(), RelayError>) -> &SubmissionStatus {
        if !self.is_pending() {
            log::warn!("relay outcome arrived with no submission pending");
            return &self.status;
        }
        self.status = match outcome {
            Ok(()) => SubmissionStatus::Success(SUCCESS_MESSAGE.to_string()),
            Err(e) => {
                log::error!("contact submission failed: {e}");
                SubmissionStatus::Error(FAILURE_MESSAGE.to_string())
            }
        };
        &self.status
    }

    /// Runs a full submission against `relay`. The form is cleared only when
    /// the relay reports success.
    pub async fn submit<R: MailRelay>(
        &mut self,
        form: &mut ContactForm,
        relay: &R,
    ) -> Result<SubmissionStatus, SubmitError> {
        let payload = self.begin(form)?;
        let outcome = relay.send(&payload).await;
        if outcome.is_ok() {
            form.clear();
        }
        Ok(self.finish(outcome).clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct StubRelay {
        succeed: bool,
        calls: AtomicUsize,
    }

    impl StubRelay {
        fn new(succeed: bool) -> Self {
            Self {
                succeed,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl MailRelay for StubRelay {
        async fn send(&self, _form: &ContactForm) -> Result<(), RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.succeed {
                Ok(())
            } else {
                Err(RelayError::Transport("connection reset".to_string()))
            }
        }
    }

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let relay = StubRelay::new(true);
        let mut controller = SubmissionController::default();
        let mut form = jane();

        let status = controller.submit(&mut form, &relay).await.unwrap();

        assert_eq!(
            status,
            SubmissionStatus::Success(
                "Thank you! Your message has been sent successfully.".to_string()
            )
        );
        assert_eq!(form, ContactForm::default());
        assert_eq!(relay.calls(), 1);
        assert!(controller.trigger_enabled());
    }

    #[tokio::test]
    async fn test_failure_keeps_form() {
        let relay = StubRelay::new(false);
        let mut controller = SubmissionController::default();
        let mut form = jane();

        let status = controller.submit(&mut form, &relay).await.unwrap();

        assert_eq!(
            status,
            SubmissionStatus::Error("Oops! Something went wrong. Please try again.".to_string())
        );
        assert_eq!(form.name, "Jane");
        assert_eq!(form.email, "jane@x.com");
        assert_eq!(form.subject, "Hi");
        assert_eq!(form.message, "Hello");
        assert!(controller.trigger_enabled());
    }

    #[tokio::test]
    async fn test_empty_name_never_reaches_relay() {
        let relay = StubRelay::new(true);
        let mut controller = SubmissionController::default();
        let mut form = jane();
        form.name.clear();

        let res = controller.submit(&mut form, &relay).await;

        assert_eq!(res, Err(SubmitError::Incomplete(vec![Field::Name])));
        assert_eq!(relay.calls(), 0);
        assert_eq!(controller.status(), &SubmissionStatus::Idle);
        assert_eq!(form.email, "jane@x.com");
    }

    #[tokio::test]
    async fn test_pending_rejects_second_submit() {
        let relay = StubRelay::new(true);
        let mut controller = SubmissionController::default();
        let mut form = jane();

        controller.begin(&form).unwrap();
        assert!(!controller.trigger_enabled());

        let res = controller.submit(&mut form, &relay).await;
        assert_eq!(res, Err(SubmitError::InFlight));
        assert_eq!(relay.calls(), 0);
        assert_eq!(form, jane());

        controller.finish(Ok(()));
        assert!(controller.trigger_enabled());
        controller.submit(&mut form, &relay).await.unwrap();
        assert_eq!(relay.calls(), 1);
    }

    #[test]
    fn test_status_persists_until_next_attempt() {
        let mut controller = SubmissionController::default();
        let form = jane();

        controller.begin(&form).unwrap();
        controller.finish(Err(RelayError::Rejected {
            status: http::StatusCode::BAD_REQUEST,
        }));
        assert_eq!(controller.status().banner(), Some(FAILURE_MESSAGE));

        // a stray outcome doesn't overwrite the shown result
        controller.finish(Ok(()));
        assert_eq!(controller.status().banner(), Some(FAILURE_MESSAGE));

        controller.begin(&form).unwrap();
        assert_eq!(controller.status(), &SubmissionStatus::Pending);
        assert_eq!(controller.status().banner(), None);
    }

    #[test]
    fn test_missing_fields() {
        let form = ContactForm {
            email: "jane@x.com".to_string(),
            message: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.missing_fields(), vec![Field::Name, Field::Subject]);
        assert!(!form.is_complete());
        assert!(jane().is_complete());

        let err = SubmitError::Incomplete(form.missing_fields());
        assert_eq!(err.to_string(), "missing required fields: name, subject");
    }

    #[test]
    fn test_set_and_get_fields() {
        let mut form = ContactForm::default();
        for f in Field::ALL {
            form.set(f, f.label().to_uppercase());
        }
        assert_eq!(form.get(Field::Email), "EMAIL");
        assert_eq!(form.message, "MESSAGE");
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
