use serde::{Deserialize, Serialize};

use pdv_core::{AdjustmentId, LineId, ProductId};

/// One product's quantity-delta record within an adjustment.
///
/// `new_quantity` is computed as `prior_quantity + delta` at add time and is
/// deliberately not clamped: a negative result is recorded as-is and only
/// becomes visible in stock once the batch is processed.
///
/// Lines are never updated in place; removing and re-adding a product
/// creates a fresh line with a fresh id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentLine {
    pub id: LineId,
    pub adjustment_id: AdjustmentId,
    pub product_id: ProductId,
    pub prior_quantity: i64,
    pub delta: i64,
    pub new_quantity: i64,
}
