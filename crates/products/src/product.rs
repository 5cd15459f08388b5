use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pdv_core::{DomainResult, ProductId};

/// Current on-hand count for a product, as recorded by the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStock {
    pub quantity: i64,
}

/// Catalog product as seen by the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    description: String,
    stock: ProductStock,
}

impl Product {
    pub fn new(id: ProductId, description: impl Into<String>, stock_quantity: i64) -> Self {
        Self {
            id,
            description: description.into(),
            stock: ProductStock {
                quantity: stock_quantity,
            },
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stock(&self) -> ProductStock {
        self.stock
    }

    /// On-hand count at lookup time. Adjustments read this as the prior
    /// quantity of a new line.
    pub fn stock_quantity(&self) -> i64 {
        self.stock.quantity
    }
}

/// Product lookup and stock mutation seam.
///
/// The not-found wording belongs to the implementation; callers surface it
/// unchanged so the root cause stays distinguishable from adjustment errors.
pub trait ProductCatalog: Send + Sync {
    fn find(&self, id: ProductId) -> DomainResult<Product>;

    /// Rewrite a product's on-hand count (used when a batch is processed).
    fn update_stock(&self, id: ProductId, quantity: i64) -> DomainResult<()>;
}

impl<S> ProductCatalog for Arc<S>
where
    S: ProductCatalog + ?Sized,
{
    fn find(&self, id: ProductId) -> DomainResult<Product> {
        (**self).find(id)
    }

    fn update_stock(&self, id: ProductId, quantity: i64) -> DomainResult<()> {
        (**self).update_stock(id, quantity)
    }
}
