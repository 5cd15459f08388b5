//! `pdv-core` — domain foundation building blocks for the PDV back office.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{AdjustmentId, LineId, ProductId};
