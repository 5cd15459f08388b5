//! Storage seams for adjustment headers and lines.
//!
//! No storage assumptions: the traits work for the in-memory backend
//! (tests/dev, single-process deployment) and for a future SQL backend.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use pdv_core::{AdjustmentId, DomainResult, LineId, ProductId};

use crate::adjustment::Adjustment;
use crate::line::AdjustmentLine;

/// Persistence backend failure.
///
/// Services translate this into the generic user-facing error kinds; the
/// detail only ever reaches the logs.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Adjustment header storage.
pub trait AdjustmentStore: Send + Sync {
    /// Resolve a header by id. The implementation owns its not-found wording
    /// ("Ajuste não encontrado" for the shipped backends); callers surface
    /// the error unchanged.
    fn find(&self, id: AdjustmentId) -> DomainResult<Adjustment>;

    /// Persist a new open header and return its assigned id.
    fn insert(&self, user: &str, created_at: NaiveDate) -> Result<AdjustmentId, StorageError>;

    /// Persist header field changes (status, observation, processing date).
    fn update(&self, adjustment: &Adjustment) -> Result<(), StorageError>;

    /// Delete a header together with all of its lines. The cascade is part
    /// of the contract, not an implementation detail.
    fn delete(&self, id: AdjustmentId) -> Result<(), StorageError>;

    /// All headers in storage order.
    fn list(&self) -> Vec<Adjustment>;
}

/// Persistence gateway for adjustment lines.
pub trait AdjustmentLineStore: Send + Sync {
    /// Persist a new line and return its assigned id.
    fn insert_line(
        &self,
        adjustment_id: AdjustmentId,
        product_id: ProductId,
        prior_quantity: i64,
        delta: i64,
        new_quantity: i64,
    ) -> Result<LineId, StorageError>;

    /// Delete one line of an adjustment. Removing an absent line is a no-op.
    fn remove_line(&self, adjustment_id: AdjustmentId, line_id: LineId)
        -> Result<(), StorageError>;

    /// Number of lines for the (adjustment, product) pair. 0 or 1 under the
    /// one-line-per-product invariant, returned as a count so callers can
    /// branch on existence.
    fn count_matching(&self, adjustment_id: AdjustmentId, product_id: ProductId) -> i64;

    /// All lines of an adjustment, in storage order. Empty when the
    /// adjustment is unknown.
    fn find_by_adjustment(&self, adjustment_id: AdjustmentId) -> Vec<AdjustmentLine>;
}

impl<S> AdjustmentStore for Arc<S>
where
    S: AdjustmentStore + ?Sized,
{
    fn find(&self, id: AdjustmentId) -> DomainResult<Adjustment> {
        (**self).find(id)
    }

    fn insert(&self, user: &str, created_at: NaiveDate) -> Result<AdjustmentId, StorageError> {
        (**self).insert(user, created_at)
    }

    fn update(&self, adjustment: &Adjustment) -> Result<(), StorageError> {
        (**self).update(adjustment)
    }

    fn delete(&self, id: AdjustmentId) -> Result<(), StorageError> {
        (**self).delete(id)
    }

    fn list(&self) -> Vec<Adjustment> {
        (**self).list()
    }
}

impl<S> AdjustmentLineStore for Arc<S>
where
    S: AdjustmentLineStore + ?Sized,
{
    fn insert_line(
        &self,
        adjustment_id: AdjustmentId,
        product_id: ProductId,
        prior_quantity: i64,
        delta: i64,
        new_quantity: i64,
    ) -> Result<LineId, StorageError> {
        (**self).insert_line(adjustment_id, product_id, prior_quantity, delta, new_quantity)
    }

    fn remove_line(
        &self,
        adjustment_id: AdjustmentId,
        line_id: LineId,
    ) -> Result<(), StorageError> {
        (**self).remove_line(adjustment_id, line_id)
    }

    fn count_matching(&self, adjustment_id: AdjustmentId, product_id: ProductId) -> i64 {
        (**self).count_matching(adjustment_id, product_id)
    }

    fn find_by_adjustment(&self, adjustment_id: AdjustmentId) -> Vec<AdjustmentLine> {
        (**self).find_by_adjustment(adjustment_id)
    }
}
