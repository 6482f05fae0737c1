//! Core Kernel - Foundational types shared by the customer directory crates
//!
//! This crate provides the building blocks used across all layers:
//! - Strongly-typed identifiers
//! - The port error type and adapter health contracts

pub mod identifiers;
pub mod ports;

pub use identifiers::CustomerId;
pub use ports::{
    PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable,
};
