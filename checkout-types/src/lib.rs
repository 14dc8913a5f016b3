//! # Checkout Types
//!
//! Domain types and port traits for the checkout gateway.
//! This crate has ZERO external IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Transient domain types (OrderPayload, ProviderReply)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the gateway's own API boundary
//! - `error/` - Provider error taxonomy
//!
//! Nothing here is persisted: every value lives for a single request.

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{OrderAmount, OrderIntent, OrderPayload, ProviderReply, PurchaseUnit};
pub use dto::*;
pub use error::ProviderError;
pub use ports::PaymentProvider;
