//! Kafka adapter publishing task status events.

use crate::config::KafkaConfig;
use crate::task::{
    domain::TaskStatusEvent,
    ports::{TaskEventPublishError, TaskEventPublishResult, TaskEventPublisher},
};
use async_trait::async_trait;
use rdkafka::ClientContext;
use rdkafka::message::Message;
use rdkafka::producer::{BaseRecord, DeliveryResult, Producer, ProducerContext, ThreadedProducer};
use std::time::Duration;
use tracing::{debug, warn};

/// Producer context that logs failed deliveries.
///
/// Delivery reports arrive on the producer's polling thread after
/// [`TaskEventPublisher::publish`] has returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeliveryLogger;

impl ClientContext for DeliveryLogger {}

impl ProducerContext for DeliveryLogger {
    type DeliveryOpaque = ();

    fn delivery(&self, delivery_result: &DeliveryResult<'_>, _delivery_opaque: Self::DeliveryOpaque) {
        match delivery_result {
            Ok(message) => debug!(
                topic = message.topic(),
                partition = message.partition(),
                offset = message.offset(),
                "task status event delivered"
            ),
            Err((err, message)) => warn!(
                error = %err,
                topic = message.topic(),
                "task status event delivery failed"
            ),
        }
    }
}

/// Fire-and-forget publisher backed by a threaded Kafka producer.
///
/// Events are JSON-encoded and sent without a key, so partitioning follows
/// the producer default.
pub struct KafkaTaskEventPublisher {
    producer: ThreadedProducer<DeliveryLogger>,
}

impl KafkaTaskEventPublisher {
    /// Creates a publisher connected to the configured brokers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEventPublishError::Transport`] when the producer cannot
    /// be created.
    pub fn new(config: &KafkaConfig) -> TaskEventPublishResult<Self> {
        let producer: ThreadedProducer<DeliveryLogger> = crate::kafka::producer_config(config)
            .create_with_context(DeliveryLogger)
            .map_err(TaskEventPublishError::transport)?;
        Ok(Self { producer })
    }

    /// Waits up to `timeout` for queued events to be delivered.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEventPublishError::Transport`] when the queue does not
    /// drain in time.
    pub fn flush(&self, timeout: Duration) -> TaskEventPublishResult<()> {
        self.producer
            .flush(timeout)
            .map_err(TaskEventPublishError::transport)
    }
}

#[async_trait]
impl TaskEventPublisher for KafkaTaskEventPublisher {
    async fn publish(&self, topic: &str, event: &TaskStatusEvent) -> TaskEventPublishResult<()> {
        let payload = serde_json::to_vec(event)?;
        let record = BaseRecord::<(), [u8]>::to(topic).payload(payload.as_slice());
        self.producer
            .send(record)
            .map_err(|(err, _)| TaskEventPublishError::transport(err))?;
        debug!(topic, task_id = %event.task_id, "task status event queued");
        Ok(())
    }
}
