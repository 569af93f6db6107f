//! Taskline: task management over HTTP with status-change notifications.
//!
//! Tasks are created, read, updated, deleted and listed through an axum API
//! and stored in `PostgreSQL`. Every update publishes a status event to Kafka;
//! a listener consumes those events and mails a notification.
//!
//! # Architecture
//!
//! Taskline follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, broker, mail)
//!
//! # Modules
//!
//! - [`task`]: Task records, persistence and the task service
//! - [`notification`]: Status event consumption and mail delivery
//! - [`http`]: Router, handlers and error mapping
//! - [`config`]: Layered application configuration

pub mod config;
pub mod http;
#[cfg(feature = "kafka")]
pub mod kafka;
pub mod notification;
pub mod task;
