use crate::config::endpoint::Endpoint;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Represents all necessary data to construct and run an integration.
///
/// Every field is optional on input. Missing fields fall back to their defaults and
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IntegratorConfig {
    pub data_sources: Vec<Endpoint>,
    pub data_targets: Vec<Endpoint>,
    pub notifications: NotificationsConfig,
    pub settings: RuntimeSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub email: EmailConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmailConfig {
    pub smtp: SmtpConfig,
    pub recipient: String,
    pub sender: String,
}

impl EmailConfig {
    pub const DEFAULT_SENDER: &'static str = "integrator@example.com";
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp: SmtpConfig::default(),
            recipient: String::new(),
            sender: Self::DEFAULT_SENDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Knobs that are not part of the integration itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuntimeSettings {
    /// Timeout for every HTTP request. Requests never time out when unset.
    pub http_timeout_secs: Option<u64>,
    /// Timeout for every SMTP command. The SMTP exchange never times out when unset.
    pub smtp_timeout_secs: Option<u64>,
    /// Replaces the payload that is pushed to the data targets.
    pub payload: Option<String>,
}

impl RuntimeSettings {
    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }

    pub fn smtp_timeout(&self) -> Option<Duration> {
        self.smtp_timeout_secs.map(Duration::from_secs)
    }
}
