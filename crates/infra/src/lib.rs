//! Infrastructure layer: storage backends for the back office seams.

pub mod in_memory;

pub use in_memory::{InMemoryAdjustmentStore, InMemoryProductCatalog};
