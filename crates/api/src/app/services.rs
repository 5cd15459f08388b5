use std::sync::Arc;

use pdv_adjustments::{AdjustmentLineService, AdjustmentService};
use pdv_infra::{InMemoryAdjustmentStore, InMemoryProductCatalog};

type Lines =
    AdjustmentLineService<InMemoryAdjustmentStore, InMemoryProductCatalog, InMemoryAdjustmentStore>;
type Adjustments =
    AdjustmentService<InMemoryAdjustmentStore, InMemoryProductCatalog, InMemoryAdjustmentStore>;

/// Shared handles behind the HTTP handlers.
pub struct AppServices {
    pub lines: Lines,
    pub adjustments: Adjustments,
    pub catalog: Arc<InMemoryProductCatalog>,
}

pub fn build_services() -> AppServices {
    // One in-memory backend serves both headers and lines, so header
    // deletion cascades inside a single store.
    let store = Arc::new(InMemoryAdjustmentStore::new());
    let catalog = Arc::new(InMemoryProductCatalog::new());

    AppServices {
        lines: AdjustmentLineService::new(store.clone(), catalog.clone(), store.clone()),
        adjustments: AdjustmentService::new(store.clone(), catalog.clone(), store),
        catalog,
    }
}
