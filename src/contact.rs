use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("email relay is not configured")]
    NotConfigured,
    #[cfg(feature = "ssr")]
    #[error("email relay request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("email relay rejected message: HTTP {status} - {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

/// Settings for the hosted EmailJS relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
}

impl EmailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::MissingVar(key));
        Ok(Self {
            endpoint: get("EMAILJS_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
            service_id: require("EMAILJS_SERVICE_ID")?,
            template_id: require("EMAILJS_TEMPLATE_ID")?,
            public_key: require("EMAILJS_PUBLIC_KEY")?,
            private_key: get("EMAILJS_PRIVATE_KEY"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let required = |field: &'static str, value: &str| {
            let value = value.trim();
            if value.is_empty() {
                Err(ContactError::MissingField(field))
            } else {
                Ok(value.to_string())
            }
        };
        let name = required("name", name)?;
        let email = required("email", email)?;
        let message = required("message", message)?;
        if !looks_like_email(&email) {
            return Err(ContactError::InvalidEmail(email));
        }
        Ok(Self {
            name,
            email,
            message,
        })
    }
}

fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Body of an EmailJS `email/send` call.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
    pub template_params: &'a ContactSubmission,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(config: &'a EmailConfig, submission: &'a ContactSubmission) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            access_token: config.private_key.as_deref(),
            template_params: submission,
        }
    }
}

#[cfg(feature = "ssr")]
pub struct EmailRelay {
    client: reqwest::Client,
    config: EmailConfig,
}

#[cfg(feature = "ssr")]
impl EmailRelay {
    pub fn new(config: &EmailConfig) -> Result<Self, ContactError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Single attempt, no retry. The caller reports failure to the user.
    pub async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let body = EmailJsRequest::new(&self.config, submission);
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContactError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// What the contact form shows, derived from the submit action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl ContactStatus {
    pub fn from_action<T, E>(pending: bool, last: Option<&Result<T, E>>) -> Self {
        match (pending, last) {
            (true, _) => ContactStatus::Sending,
            (false, None) => ContactStatus::Idle,
            (false, Some(Ok(_))) => ContactStatus::Sent,
            (false, Some(Err(_))) => ContactStatus::Failed,
        }
    }

    pub fn submit_disabled(self) -> bool {
        matches!(self, ContactStatus::Sending)
    }

    pub fn button_label(self) -> &'static str {
        if self.submit_disabled() {
            "Sending..."
        } else {
            "Send"
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            ContactStatus::Sent => Some(SENT_MESSAGE),
            ContactStatus::Failed => Some(FAILED_MESSAGE),
            ContactStatus::Idle | ContactStatus::Sending => None,
        }
    }

    /// Inputs are cleared only after a successful send.
    pub fn clears_fields(self) -> bool {
        matches!(self, ContactStatus::Sent)
    }
}
