//! Shared Kafka client construction and topic provisioning.

use crate::config::{KafkaConfig, TopicConfig};
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::config::ClientConfig;
use rdkafka::error::{KafkaError, KafkaResult, RDKafkaErrorCode};
use tracing::{debug, info};

/// Builds the producer client configuration.
#[must_use]
pub fn producer_config(config: &KafkaConfig) -> ClientConfig {
    let mut client = ClientConfig::new();
    client
        .set("bootstrap.servers", &config.bootstrap_servers)
        .set("acks", &config.producer_acks);
    client
}

/// Builds the consumer client configuration.
///
/// Auto-commit is disabled: the listener commits each message after
/// handling it.
#[must_use]
pub fn consumer_config(config: &KafkaConfig) -> ClientConfig {
    let mut client = ClientConfig::new();
    client
        .set("bootstrap.servers", &config.bootstrap_servers)
        .set("group.id", &config.group_id)
        .set("enable.auto.commit", "false")
        .set("auto.offset.reset", &config.auto_offset_reset)
        .set("session.timeout.ms", config.session_timeout_ms.to_string())
        .set("max.poll.interval.ms", config.max_poll_interval_ms.to_string())
        .set(
            "max.partition.fetch.bytes",
            config.max_partition_fetch_bytes.to_string(),
        );
    client
}

/// Creates the status topic with the configured partitions and replication
/// factor. An existing topic is left untouched.
///
/// # Errors
///
/// Returns [`KafkaError`] when the admin client cannot be created or the
/// broker rejects the topic for any reason other than it already existing.
pub async fn ensure_topic(config: &KafkaConfig) -> KafkaResult<()> {
    let admin: AdminClient<DefaultClientContext> = ClientConfig::new()
        .set("bootstrap.servers", &config.bootstrap_servers)
        .create()?;

    let TopicConfig {
        name,
        num_partitions,
        replication_factor,
    } = &config.topic;
    let topic = NewTopic::new(
        name,
        i32::from(*num_partitions),
        TopicReplication::Fixed(i32::from(*replication_factor)),
    );

    let results = admin.create_topics([&topic], &AdminOptions::new()).await?;
    for result in results {
        match result {
            Ok(created) => info!(topic = %created, "created status topic"),
            Err((existing, RDKafkaErrorCode::TopicAlreadyExists)) => {
                debug!(topic = %existing, "status topic already exists");
            }
            Err((_, code)) => return Err(KafkaError::AdminOp(code)),
        }
    }
    Ok(())
}
