use crate::config::{EmailConfig, SmtpConfig};
use crate::notify::error::NotificationError;
use crate::notify::notification::Notification;
use crate::notify::traits::Notifier;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Message, SmtpTransport, Transport};
use log::{debug, info};
use std::time::Duration;

/// Sends notifications as plaintext emails over SMTP.
///
/// The connection is opened per notification. STARTTLS is used when the server offers
/// it and credentials are only sent when a username is configured.
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    smtp: SmtpConfig,
    sender: String,
    recipient: String,
    timeout: Option<Duration>,
}

impl EmailNotifier {
    pub fn new(email_config: EmailConfig, timeout: Option<Duration>) -> Self {
        Self {
            smtp: email_config.smtp,
            sender: email_config.sender,
            recipient: email_config.recipient,
            timeout,
        }
    }

    fn server_address(&self) -> String {
        format!("{}:{}", self.smtp.server, self.smtp.port)
    }

    fn parse_mailbox(address: &str) -> Result<Mailbox, NotificationError> {
        address
            .parse::<Mailbox>()
            .map_err(|err| NotificationError::Address {
                address: address.to_string(),
                err,
            })
    }

    fn build_message(&self, notification: &Notification) -> Result<Message, NotificationError> {
        Ok(Message::builder()
            .from(Self::parse_mailbox(&self.sender)?)
            .to(Self::parse_mailbox(&self.recipient)?)
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())?)
    }

    fn transport(&self) -> Result<SmtpTransport, NotificationError> {
        let tls_parameters =
            TlsParameters::new(self.smtp.server.clone()).map_err(|err| NotificationError::Smtp {
                server: self.server_address(),
                err,
            })?;

        let mut builder = SmtpTransport::builder_dangerous(self.smtp.server.as_str())
            .port(self.smtp.port)
            .tls(Tls::Opportunistic(tls_parameters))
            .timeout(self.timeout);

        if !self.smtp.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                self.smtp.username.clone(),
                self.smtp.password.clone(),
            ));
        }
        Ok(builder.build())
    }
}

impl Notifier for EmailNotifier {
    fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        let message = self.build_message(notification)?;
        let mailer = self.transport()?;

        debug!("Sending notification to {} via {}", self.recipient, self.server_address());
        let response = mailer
            .send(&message)
            .map_err(|err| NotificationError::Smtp {
                server: self.server_address(),
                err,
            })?;

        info!(
            "Notified {} (server replied {})",
            self.recipient,
            response.code()
        );
        Ok(())
    }
}
