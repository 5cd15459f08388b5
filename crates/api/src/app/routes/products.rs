use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{dto, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/", get(list_products).post(create_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.catalog.list())).into_response()
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let id = services
        .catalog
        .insert(&body.description, body.stock_quantity);

    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": id.value() })),
    )
        .into_response()
}
