//! Stock adjustment batches ("ajustes") and their product lines.
//!
//! An adjustment groups per-product quantity corrections for later
//! processing. While the batch is open, staff add and remove lines; once it
//! is processed the batch is sealed and the recorded quantities become the
//! products' stock counts.

pub mod adjustment;
pub mod line;
pub mod service;
pub mod store;

pub use adjustment::{Adjustment, AdjustmentStatus};
pub use line::AdjustmentLine;
pub use service::{AdjustmentLineService, AdjustmentService};
pub use store::{AdjustmentLineStore, AdjustmentStore, StorageError};
