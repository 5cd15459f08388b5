//! Back office services for adjustment batches and their lines.
//!
//! These are the single authority for mutating adjustments. Every operation
//! re-reads the header and checks the status gate before touching storage,
//! so a sealed batch can never change, whichever path the caller takes.

use std::sync::Arc;

use chrono::Utc;

use pdv_core::{AdjustmentId, DomainError, DomainResult, LineId, ProductId};
use pdv_products::ProductCatalog;

use crate::adjustment::Adjustment;
use crate::line::AdjustmentLine;
use crate::store::{AdjustmentLineStore, AdjustmentStore};

/// Confirmation after a successful line insert. The screens reuse the
/// processing wording here; keep it verbatim.
pub const MSG_LINE_ADDED: &str = "Ajuste processado com sucesso";

/// Confirmation after a successful line removal.
pub const MSG_LINE_REMOVED: &str = "Produto removido com sucesso";

/// Confirmation after a batch is processed.
pub const MSG_PROCESSED: &str = "Ajuste processado com sucesso";

/// Confirmation after a batch is deleted.
pub const MSG_DELETED: &str = "Ajuste removido com sucesso";

/// Line-item service: add/remove/read the product lines of an adjustment.
pub struct AdjustmentLineService<A, P, L> {
    adjustments: Arc<A>,
    products: Arc<P>,
    lines: Arc<L>,
}

impl<A, P, L> AdjustmentLineService<A, P, L>
where
    A: AdjustmentStore,
    P: ProductCatalog,
    L: AdjustmentLineStore,
{
    pub fn new(adjustments: Arc<A>, products: Arc<P>, lines: Arc<L>) -> Self {
        Self {
            adjustments,
            products,
            lines,
        }
    }

    /// All lines of the adjustment, in storage order. No existence check:
    /// an unknown adjustment simply yields an empty list.
    pub fn list_lines(&self, adjustment_id: AdjustmentId) -> Vec<AdjustmentLine> {
        self.lines.find_by_adjustment(adjustment_id)
    }

    /// Number of existing lines for the (adjustment, product) pair.
    pub fn count_matching_line(&self, adjustment_id: AdjustmentId, product_id: ProductId) -> i64 {
        self.lines.count_matching(adjustment_id, product_id)
    }

    /// Add a product line with the requested quantity delta.
    ///
    /// The resulting quantity is `current stock + delta`, never clamped: a
    /// negative result is recorded and left for the operator to review
    /// before processing.
    pub fn add_line(
        &self,
        adjustment_id: AdjustmentId,
        product_id: ProductId,
        quantity_delta: i64,
    ) -> DomainResult<&'static str> {
        let adjustment = self.adjustments.find(adjustment_id)?;
        adjustment.ensure_to_process()?;

        let product = self.products.find(product_id)?;

        if self.lines.count_matching(adjustment_id, product_id) > 0 {
            return Err(DomainError::DuplicateLine);
        }

        let prior_quantity = product.stock_quantity();
        let new_quantity = prior_quantity + quantity_delta;

        // The duplicate check and the insert are two separate gateway calls
        // with no shared transaction; a concurrent add for the same pair can
        // slip through.
        self.lines
            .insert_line(
                adjustment_id,
                product_id,
                prior_quantity,
                quantity_delta,
                new_quantity,
            )
            .map_err(|e| {
                tracing::warn!(%adjustment_id, %product_id, error = %e, "line insert failed");
                DomainError::InsertFailed
            })?;

        Ok(MSG_LINE_ADDED)
    }

    /// Remove one line from an open adjustment.
    pub fn remove_line(
        &self,
        adjustment_id: AdjustmentId,
        line_id: LineId,
    ) -> DomainResult<&'static str> {
        let adjustment = self.adjustments.find(adjustment_id)?;
        adjustment.ensure_to_process()?;

        self.lines
            .remove_line(adjustment_id, line_id)
            .map_err(|e| {
                tracing::warn!(%adjustment_id, %line_id, error = %e, "line removal failed");
                DomainError::RemoveFailed
            })?;

        Ok(MSG_LINE_REMOVED)
    }
}

/// Batch header lifecycle: create, process, delete, read.
pub struct AdjustmentService<A, P, L> {
    adjustments: Arc<A>,
    products: Arc<P>,
    lines: Arc<L>,
}

impl<A, P, L> AdjustmentService<A, P, L>
where
    A: AdjustmentStore,
    P: ProductCatalog,
    L: AdjustmentLineStore,
{
    pub fn new(adjustments: Arc<A>, products: Arc<P>, lines: Arc<L>) -> Self {
        Self {
            adjustments,
            products,
            lines,
        }
    }

    pub fn list(&self) -> Vec<Adjustment> {
        self.adjustments.list()
    }

    pub fn find(&self, id: AdjustmentId) -> DomainResult<Adjustment> {
        self.adjustments.find(id)
    }

    /// Open a new batch for the given responsible user.
    pub fn create(&self, user: &str) -> DomainResult<AdjustmentId> {
        let today = Utc::now().date_naive();
        self.adjustments.insert(user, today).map_err(|e| {
            tracing::warn!(user, error = %e, "adjustment insert failed");
            DomainError::SaveFailed
        })
    }

    /// Process an open batch: each line's resulting quantity becomes the
    /// product's stock count, then the header is sealed with today's date.
    pub fn process(
        &self,
        id: AdjustmentId,
        observation: Option<String>,
    ) -> DomainResult<&'static str> {
        let mut adjustment = self.adjustments.find(id)?;
        adjustment.ensure_to_process()?;

        for line in self.lines.find_by_adjustment(id) {
            self.products.update_stock(line.product_id, line.new_quantity)?;
        }

        adjustment.mark_processed(observation, Utc::now().date_naive());
        self.adjustments.update(&adjustment).map_err(|e| {
            tracing::warn!(adjustment_id = %id, error = %e, "adjustment update failed");
            DomainError::SaveFailed
        })?;

        Ok(MSG_PROCESSED)
    }

    /// Delete an open batch; the store cascades the deletion to its lines.
    pub fn delete(&self, id: AdjustmentId) -> DomainResult<&'static str> {
        let adjustment = self.adjustments.find(id)?;
        adjustment.ensure_to_process()?;

        self.adjustments.delete(id).map_err(|e| {
            tracing::warn!(adjustment_id = %id, error = %e, "adjustment delete failed");
            DomainError::DeleteFailed
        })?;

        Ok(MSG_DELETED)
    }
}
