//! Kafka listener feeding status events to the notification consumer.

use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::message::Message;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::{KafkaConfig, RetryConfig};
use crate::notification::{
    domain::Acknowledgement, ports::NotificationSender, services::TaskStatusConsumer,
};

/// Errors raised while setting the listener up.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The consumer could not be created or subscribed.
    #[error("kafka consumer error: {0}")]
    Kafka(#[from] KafkaError),
}

/// What to do after a failed receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackoffStep {
    /// Wait one interval and try again.
    Retry {
        /// Consecutive failures so far.
        attempt: u32,
    },
    /// The attempt budget is spent; the counter has been reset.
    Exhausted {
        /// Consecutive failures that used up the budget.
        attempts: u32,
    },
}

/// Fixed-interval, fixed-attempt backoff for receive errors.
///
/// Exhausting the budget never stops consumption: the counter starts over
/// and the listener keeps polling after one more interval.
#[derive(Debug, Clone, Copy)]
pub struct ReceiveBackoff {
    policy: RetryConfig,
    failures: u32,
}

impl ReceiveBackoff {
    /// Creates a backoff with no recorded failures.
    #[must_use]
    pub const fn new(policy: RetryConfig) -> Self {
        Self {
            policy,
            failures: 0,
        }
    }

    /// Records one failed receive.
    pub const fn record_failure(&mut self) -> BackoffStep {
        self.failures = self.failures.saturating_add(1);
        if self.failures >= self.policy.max_attempts {
            let attempts = self.failures;
            self.failures = 0;
            BackoffStep::Exhausted { attempts }
        } else {
            BackoffStep::Retry {
                attempt: self.failures,
            }
        }
    }

    /// Clears the failure count after a successful receive.
    pub const fn reset(&mut self) {
        self.failures = 0;
    }

    /// Returns the current consecutive failure count.
    #[must_use]
    pub const fn failures(&self) -> u32 {
        self.failures
    }

    /// Returns the delay before the next receive.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.policy.interval()
    }
}

/// Receives status events one at a time, hands them to the consumer and
/// commits each offset once handled.
pub struct KafkaTaskStatusListener<S>
where
    S: NotificationSender,
{
    consumer: StreamConsumer,
    topic: String,
    retry: RetryConfig,
    handler: Arc<TaskStatusConsumer<S>>,
}

impl<S> KafkaTaskStatusListener<S>
where
    S: NotificationSender,
{
    /// Creates a listener for the configured status topic.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::Kafka`] when the consumer cannot be created.
    pub fn new(
        config: &KafkaConfig,
        handler: Arc<TaskStatusConsumer<S>>,
    ) -> Result<Self, ListenerError> {
        let consumer: StreamConsumer = crate::kafka::consumer_config(config).create()?;
        Ok(Self {
            consumer,
            topic: config.topic.name.clone(),
            retry: config.error_handler,
            handler,
        })
    }

    /// Runs until `shutdown` is cancelled.
    ///
    /// Receive errors are retried through [`ReceiveBackoff`] and commit
    /// failures are logged; neither ends the loop.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::Kafka`] when subscribing to the topic fails.
    pub async fn run(&self, shutdown: CancellationToken) -> Result<(), ListenerError> {
        self.consumer.subscribe(&[self.topic.as_str()])?;
        info!(topic = %self.topic, "listening for task status events");

        let mut backoff = ReceiveBackoff::new(self.retry);
        loop {
            let received = tokio::select! {
                () = shutdown.cancelled() => break,
                next = self.consumer.recv() => next,
            };

            match received {
                Ok(message) => {
                    backoff.reset();
                    let payload = message.payload().unwrap_or_default();
                    match self.handler.handle(payload).await {
                        Acknowledgement::Ack => {
                            if let Err(err) =
                                self.consumer.commit_message(&message, CommitMode::Async)
                            {
                                warn!(
                                    error = %err,
                                    offset = message.offset(),
                                    "failed to commit task status event offset"
                                );
                            }
                        }
                    }
                }
                Err(err) => {
                    match backoff.record_failure() {
                        BackoffStep::Retry { attempt } => warn!(
                            error = %err,
                            attempt,
                            max_attempts = self.retry.max_attempts,
                            "failed to receive task status event; retrying"
                        ),
                        BackoffStep::Exhausted { attempts } => error!(
                            error = %err,
                            attempts,
                            "receive retries exhausted; continuing after backoff"
                        ),
                    }
                    tokio::select! {
                        () = shutdown.cancelled() => break,
                        () = tokio::time::sleep(backoff.interval()) => {}
                    }
                }
            }
        }

        info!(topic = %self.topic, "task status listener stopped");
        Ok(())
    }
}
