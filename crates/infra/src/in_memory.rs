//! In-memory storage backends.
//!
//! Intended for tests/dev and the single-process deployment. Not optimized
//! for performance.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use pdv_adjustments::{
    Adjustment, AdjustmentLine, AdjustmentLineStore, AdjustmentStore, StorageError,
};
use pdv_core::{AdjustmentId, DomainError, DomainResult, LineId, ProductId};
use pdv_products::{Product, ProductCatalog};

const ADJUSTMENT_NOT_FOUND: &str = "Ajuste não encontrado";
const PRODUCT_NOT_FOUND: &str = "Produto não encontrado";

#[derive(Debug, Default)]
struct AdjustmentState {
    next_adjustment_id: i64,
    next_line_id: i64,
    headers: BTreeMap<i64, Adjustment>,
    // Insertion order is the storage order exposed by `find_by_adjustment`.
    lines: Vec<AdjustmentLine>,
}

/// In-memory backend for adjustment headers and their lines.
///
/// One struct implements both store traits so that header deletion can
/// cascade to lines without cross-store coordination.
#[derive(Debug, Default)]
pub struct InMemoryAdjustmentStore {
    inner: RwLock<AdjustmentState>,
}

impl InMemoryAdjustmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdjustmentStore for InMemoryAdjustmentStore {
    fn find(&self, id: AdjustmentId) -> DomainResult<Adjustment> {
        self.inner
            .read()
            .ok()
            .and_then(|state| state.headers.get(&id.value()).cloned())
            .ok_or_else(|| DomainError::not_found(ADJUSTMENT_NOT_FOUND))
    }

    fn insert(&self, user: &str, created_at: NaiveDate) -> Result<AdjustmentId, StorageError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| StorageError::backend("lock poisoned"))?;

        state.next_adjustment_id += 1;
        let id = AdjustmentId::new(state.next_adjustment_id);
        state
            .headers
            .insert(id.value(), Adjustment::new(id, user, created_at));
        Ok(id)
    }

    fn update(&self, adjustment: &Adjustment) -> Result<(), StorageError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| StorageError::backend("lock poisoned"))?;

        let key = adjustment.id().value();
        if !state.headers.contains_key(&key) {
            return Err(StorageError::backend(format!(
                "unknown adjustment {}",
                adjustment.id()
            )));
        }
        state.headers.insert(key, adjustment.clone());
        Ok(())
    }

    fn delete(&self, id: AdjustmentId) -> Result<(), StorageError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| StorageError::backend("lock poisoned"))?;

        if state.headers.remove(&id.value()).is_none() {
            return Err(StorageError::backend(format!("unknown adjustment {id}")));
        }
        // A header owns its lines: cascade.
        state.lines.retain(|line| line.adjustment_id != id);
        Ok(())
    }

    fn list(&self) -> Vec<Adjustment> {
        match self.inner.read() {
            Ok(state) => state.headers.values().cloned().collect(),
            Err(_) => vec![],
        }
    }
}

impl AdjustmentLineStore for InMemoryAdjustmentStore {
    fn insert_line(
        &self,
        adjustment_id: AdjustmentId,
        product_id: ProductId,
        prior_quantity: i64,
        delta: i64,
        new_quantity: i64,
    ) -> Result<LineId, StorageError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| StorageError::backend("lock poisoned"))?;

        state.next_line_id += 1;
        let id = LineId::new(state.next_line_id);
        state.lines.push(AdjustmentLine {
            id,
            adjustment_id,
            product_id,
            prior_quantity,
            delta,
            new_quantity,
        });
        Ok(id)
    }

    fn remove_line(
        &self,
        adjustment_id: AdjustmentId,
        line_id: LineId,
    ) -> Result<(), StorageError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| StorageError::backend("lock poisoned"))?;

        state
            .lines
            .retain(|line| !(line.adjustment_id == adjustment_id && line.id == line_id));
        Ok(())
    }

    fn count_matching(&self, adjustment_id: AdjustmentId, product_id: ProductId) -> i64 {
        match self.inner.read() {
            Ok(state) => state
                .lines
                .iter()
                .filter(|line| line.adjustment_id == adjustment_id && line.product_id == product_id)
                .count() as i64,
            Err(_) => 0,
        }
    }

    fn find_by_adjustment(&self, adjustment_id: AdjustmentId) -> Vec<AdjustmentLine> {
        match self.inner.read() {
            Ok(state) => state
                .lines
                .iter()
                .filter(|line| line.adjustment_id == adjustment_id)
                .cloned()
                .collect(),
            Err(_) => vec![],
        }
    }
}

#[derive(Debug, Default)]
struct CatalogState {
    next_product_id: i64,
    products: BTreeMap<i64, Product>,
}

/// In-memory product catalog.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    inner: RwLock<CatalogState>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product and return its assigned id.
    pub fn insert(&self, description: &str, stock_quantity: i64) -> ProductId {
        let mut state = self.inner.write().unwrap_or_else(|e| e.into_inner());
        state.next_product_id += 1;
        let id = ProductId::new(state.next_product_id);
        state
            .products
            .insert(id.value(), Product::new(id, description, stock_quantity));
        id
    }

    pub fn list(&self) -> Vec<Product> {
        match self.inner.read() {
            Ok(state) => state.products.values().cloned().collect(),
            Err(_) => vec![],
        }
    }
}

impl ProductCatalog for InMemoryProductCatalog {
    fn find(&self, id: ProductId) -> DomainResult<Product> {
        self.inner
            .read()
            .ok()
            .and_then(|state| state.products.get(&id.value()).cloned())
            .ok_or_else(|| DomainError::not_found(PRODUCT_NOT_FOUND))
    }

    fn update_stock(&self, id: ProductId, quantity: i64) -> DomainResult<()> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| DomainError::not_found(PRODUCT_NOT_FOUND))?;

        let product = state
            .products
            .get(&id.value())
            .cloned()
            .ok_or_else(|| DomainError::not_found(PRODUCT_NOT_FOUND))?;

        state
            .products
            .insert(id.value(), Product::new(id, product.description(), quantity));
        Ok(())
    }
}
