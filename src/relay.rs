use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::contact::{ContactForm, MailRelay, RelayError};

const DEFAULT_DELAY_MS: u64 = 1500;
const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown CONTACT_RELAY kind: {0}")]
    UnknownRelay(String),
    #[error("{0} must be set when CONTACT_RELAY=emailjs")]
    MissingVar(&'static str),
    #[error("CONTACT_RELAY_DELAY_MS is not a number of milliseconds: {0}")]
    InvalidDelay(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayConfig {
    Simulated { delay: Duration },
    EmailJs(EmailJsConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads relay settings through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| var(key).ok_or(ConfigError::MissingVar(key));

        let kind = var("CONTACT_RELAY").unwrap_or_else(|| "simulated".to_string());
        match kind.trim().to_lowercase().as_str() {
            "simulated" => {
                let delay = match var("CONTACT_RELAY_DELAY_MS") {
                    Some(v) => v
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidDelay(v.clone()))?,
                    None => DEFAULT_DELAY_MS,
                };
                Ok(Self::Simulated {
                    delay: Duration::from_millis(delay),
                })
            }
            "emailjs" => Ok(Self::EmailJs(EmailJsConfig {
                endpoint: var("EMAILJS_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
                service_id: required("EMAILJS_SERVICE_ID")?,
                template_id: required("EMAILJS_TEMPLATE_ID")?,
                public_key: required("EMAILJS_PUBLIC_KEY")?,
            })),
            _ => Err(ConfigError::UnknownRelay(kind)),
        }
    }
}

/// Stand-in relay for sites without a mail provider: waits, logs, succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedRelay {
    delay: Duration,
}

impl SimulatedRelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl MailRelay for SimulatedRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(
            from = %form.email,
            subject = %form.subject,
            "simulated delivery of contact message"
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Forwards messages to the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsRelay {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl MailRelay for EmailJsRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        let body = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                from_name: &form.name,
                from_email: &form.email,
                subject: &form.subject,
                message: &form.message,
            },
        };
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(from = %form.email, "contact message relayed");
            Ok(())
        } else {
            tracing::warn!(%status, "relay rejected contact message");
            Err(RelayError::Rejected { status })
        }
    }
}

/// The relay chosen at startup, shared with server functions through context.
#[derive(Debug, Clone)]
pub enum Relay {
    Simulated(SimulatedRelay),
    EmailJs(EmailJsRelay),
}

impl From<RelayConfig> for Relay {
    fn from(config: RelayConfig) -> Self {
        match config {
            RelayConfig::Simulated { delay } => Relay::Simulated(SimulatedRelay::new(delay)),
            RelayConfig::EmailJs(c) => Relay::EmailJs(EmailJsRelay::new(c)),
        }
    }
}

impl Relay {
    pub fn kind(&self) -> &'static str {
        match self {
            Relay::Simulated(_) => "simulated",
            Relay::EmailJs(_) => "emailjs",
        }
    }
}

impl MailRelay for Relay {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        match self {
            Relay::Simulated(r) => r.send(form).await,
            Relay::EmailJs(r) => r.send(form).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::contact::{SubmissionController, SubmissionStatus};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_simulated() {
        let config = RelayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(
            config,
            RelayConfig::Simulated {
                delay: Duration::from_millis(1500)
            }
        );

        let config = RelayConfig::from_lookup(lookup(&[
            ("CONTACT_RELAY", "Simulated"),
            ("CONTACT_RELAY_DELAY_MS", "20"),
        ]))
        .unwrap();
        assert_eq!(
            config,
            RelayConfig::Simulated {
                delay: Duration::from_millis(20)
            }
        );
    }

    #[test]
    fn test_bad_settings() {
        let err = RelayConfig::from_lookup(lookup(&[("CONTACT_RELAY", "smtp")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownRelay("smtp".to_string()));

        let err =
            RelayConfig::from_lookup(lookup(&[("CONTACT_RELAY_DELAY_MS", "soon")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDelay("soon".to_string()));
    }

    #[test]
    fn test_emailjs_requires_ids() {
        let err = RelayConfig::from_lookup(lookup(&[
            ("CONTACT_RELAY", "emailjs"),
            ("EMAILJS_SERVICE_ID", "service_1"),
            ("EMAILJS_TEMPLATE_ID", " "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("EMAILJS_TEMPLATE_ID"));

        let config = RelayConfig::from_lookup(lookup(&[
            ("CONTACT_RELAY", "emailjs"),
            ("EMAILJS_SERVICE_ID", "service_1"),
            ("EMAILJS_TEMPLATE_ID", "template_1"),
            ("EMAILJS_PUBLIC_KEY", "key_1"),
        ]))
        .unwrap();
        let RelayConfig::EmailJs(c) = config else {
            panic!("expected an EmailJS config");
        };
        assert_eq!(c.endpoint, DEFAULT_EMAILJS_ENDPOINT);
        assert_eq!(c.public_key, "key_1");
        assert_eq!(Relay::from(RelayConfig::EmailJs(c)).kind(), "emailjs");
    }

    #[tokio::test]
    async fn test_simulated_relay_succeeds() {
        let relay = Relay::from(RelayConfig::Simulated {
            delay: Duration::from_millis(1),
        });
        let mut controller = SubmissionController::default();
        let mut form = ContactForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };

        let status = controller.submit(&mut form, &relay).await.unwrap();
        assert!(matches!(status, SubmissionStatus::Success(_)));
        assert!(form.name.is_empty());
    }

    fn emailjs_config(endpoint: String) -> EmailJsConfig {
        EmailJsConfig {
            endpoint,
            service_id: "service_1".to_string(),
            template_id: "template_1".to_string(),
            public_key: "key_1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_emailjs_status_mapping() {
        use axum::{http::StatusCode, routing::post, Json, Router};

        let app = Router::new()
            .route(
                "/ok",
                post(|Json(body): Json<serde_json::Value>| async move {
                    let expected = body["service_id"] == "service_1"
                        && body["user_id"] == "key_1"
                        && body["template_params"]["from_email"] == "jane@x.com";
                    if expected {
                        StatusCode::OK
                    } else {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                }),
            )
            .route("/reject", post(|| async { StatusCode::BAD_REQUEST }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let form = ContactForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };

        let relay = EmailJsRelay::new(emailjs_config(format!("http://{addr}/ok")));
        assert_eq!(relay.send(&form).await, Ok(()));

        let relay = EmailJsRelay::new(emailjs_config(format!("http://{addr}/reject")));
        assert_eq!(
            relay.send(&form).await,
            Err(RelayError::Rejected {
                status: StatusCode::BAD_REQUEST
            })
        );

        // nothing listens once the listener is dropped
        let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = closed.local_addr().unwrap();
        drop(closed);
        let relay = EmailJsRelay::new(emailjs_config(format!("http://{dead}/send")));
        assert!(matches!(
            relay.send(&form).await,
            Err(RelayError::Transport(_))
        ));
    }
}
