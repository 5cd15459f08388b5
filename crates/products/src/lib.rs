//! Product catalog seam consumed by the stock-adjustment workflow.

pub mod product;

pub use product::{Product, ProductCatalog, ProductStock};
