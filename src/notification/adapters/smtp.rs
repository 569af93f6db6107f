//! SMTP sender backed by lettre's async tokio transport.

use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::{self, authentication::Credentials};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::config::MailConfig;
use crate::notification::{
    domain::{NotificationError, NotificationResult},
    ports::NotificationSender,
};

/// SMTP reply codes meaning the server refused to authenticate us.
const AUTH_REJECTED_CODES: [&str; 3] = ["530", "534", "535"];

/// Sends notifications through an SMTP relay using STARTTLS.
pub struct SmtpNotificationSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotificationSender {
    /// Builds a pooled transport for the configured relay.
    ///
    /// Credentials are only attached when a user name is configured.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Send`] when the sender address does not
    /// parse or the relay host is invalid.
    pub fn new(config: &MailConfig) -> NotificationResult<Self> {
        let from: Mailbox = config.from.parse().map_err(NotificationError::send)?;
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(NotificationError::send)?
            .port(config.port);
        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }
        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

fn classify(err: smtp::Error) -> NotificationError {
    let auth_rejected = err
        .status()
        .is_some_and(|code| AUTH_REJECTED_CODES.contains(&code.to_string().as_str()));
    if auth_rejected {
        NotificationError::Authentication(err.to_string())
    } else {
        NotificationError::send(err)
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> NotificationResult<()> {
        let recipient: Mailbox = to.parse().map_err(NotificationError::send)?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_owned())
            .map_err(NotificationError::send)?;

        self.transport.send(message).await.map_err(classify)?;
        debug!(to, subject, "notification sent");
        Ok(())
    }
}
