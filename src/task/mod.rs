//! Task management.
//!
//! Creating, reading, updating, deleting and listing task records. Every
//! update forces the `UPDATE` status and publishes a status event for the
//! notification consumer. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! The wire shape lives in [`dto`] and the conversions in [`mapper`].

pub mod adapters;
pub mod domain;
pub mod dto;
pub mod mapper;
pub mod ports;
pub mod services;
