//! Task status notifications.
//!
//! Status events published by task updates are consumed here and turned into
//! plain-text mail for a configured recipient. Consumption never blocks on
//! delivery: every received event is acknowledged whether or not the mail
//! went out.
//!
//! - Domain types in [`domain`]
//! - The sender contract in [`ports`]
//! - Mail and transport adapters in [`adapters`]
//! - The event consumer in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
