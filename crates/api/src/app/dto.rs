use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAdjustmentRequest {
    pub user: String,
}

#[derive(Debug, Deserialize)]
pub struct ProcessAdjustmentRequest {
    pub observation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddLineRequest {
    pub product_id: i64,
    pub quantity_delta: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub description: String,
    pub stock_quantity: i64,
}
