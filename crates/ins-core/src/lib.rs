//! # ins-core
//!
//! Core types, traits, and utilities for BCINS RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Error taxonomy for ledger calls and gateway operations
//! - Result type aliases
//! - Collaborator traits (LedgerClient, EventSource, ReadinessCheck)
//! - An embeddable event emitter and a shared readiness flag
//! - Configuration types

pub mod error;
pub mod result;
pub mod traits;
pub mod events;
pub mod readiness;
pub mod config;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use events::{EventEmitter, BLOCK_EVENT};
pub use readiness::ReadyFlag;
