//! Consumer turning task status events into notifications.

use minijinja::Environment;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::NotificationConfig;
use crate::notification::{
    domain::{Acknowledgement, NotificationError},
    ports::NotificationSender,
};
use crate::task::domain::TaskStatusEvent;

/// Body template rendered against the decoded event (`taskId`, `status`,
/// `description`).
pub const DEFAULT_BODY_TEMPLATE: &str =
    "Task {{ taskId }} is now {{ status }}.\n\n{{ description }}";

/// Handles one status event at a time and mails the configured recipient.
///
/// Every event is acknowledged: undecodable payloads, render failures and
/// delivery failures are logged and dropped.
pub struct TaskStatusConsumer<S>
where
    S: NotificationSender,
{
    sender: Arc<S>,
    recipient: String,
    subject: String,
    template: String,
}

impl<S> TaskStatusConsumer<S>
where
    S: NotificationSender,
{
    /// Creates a consumer mailing `recipient` with the default body template.
    #[must_use]
    pub fn new(sender: Arc<S>, recipient: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
            subject: subject.into(),
            template: DEFAULT_BODY_TEMPLATE.to_owned(),
        }
    }

    /// Creates a consumer from the notification settings.
    #[must_use]
    pub fn from_config(sender: Arc<S>, config: &NotificationConfig) -> Self {
        Self::new(sender, config.email.clone(), config.subject.clone())
    }

    /// Replaces the body template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Renders the notification body for `event`.
    ///
    /// # Errors
    ///
    /// Returns the template error when the template does not parse or
    /// render.
    pub fn render(&self, event: &TaskStatusEvent) -> Result<String, minijinja::Error> {
        Environment::new().render_str(&self.template, event)
    }

    /// Handles one raw event payload.
    pub async fn handle(&self, payload: &[u8]) -> Acknowledgement {
        info!(payload = %String::from_utf8_lossy(payload), "received task status event");

        let event: TaskStatusEvent = match serde_json::from_slice(payload) {
            Ok(event) => event,
            Err(err) => {
                warn!(error = %err, "dropping undecodable task status event");
                return Acknowledgement::Ack;
            }
        };

        let body = match self.render(&event) {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, task_id = %event.task_id, "failed to render notification body");
                return Acknowledgement::Ack;
            }
        };

        match self.sender.send(&self.recipient, &self.subject, &body).await {
            Ok(()) => info!(task_id = %event.task_id, to = %self.recipient, "notification sent"),
            Err(NotificationError::Authentication(reason)) => warn!(
                task_id = %event.task_id,
                %reason,
                "mail server rejected credentials; notification dropped"
            ),
            Err(err) => warn!(
                task_id = %event.task_id,
                error = %err,
                "notification delivery failed; notification dropped"
            ),
        }
        Acknowledgement::Ack
    }
}
