use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use pdv_core::{AdjustmentId, LineId, ProductId};

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_adjustments).post(create_adjustment))
        .route("/:id", delete(delete_adjustment))
        .route("/:id/process", post(process_adjustment))
        .route("/:id/lines", get(list_lines).post(add_line))
        .route("/:id/lines/:line_id", delete(remove_line))
}

fn message_response(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

pub async fn list_adjustments(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.adjustments.list())).into_response()
}

pub async fn create_adjustment(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateAdjustmentRequest>,
) -> axum::response::Response {
    match services.adjustments.create(&body.user) {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": id.value() })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn process_adjustment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Json(body): Json<dto::ProcessAdjustmentRequest>,
) -> axum::response::Response {
    match services
        .adjustments
        .process(AdjustmentId::new(id), body.observation)
    {
        Ok(msg) => message_response(StatusCode::OK, msg),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_adjustment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.adjustments.delete(AdjustmentId::new(id)) {
        Ok(msg) => message_response(StatusCode::OK, msg),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_lines(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(services.lines.list_lines(AdjustmentId::new(id))),
    )
        .into_response()
}

pub async fn add_line(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Json(body): Json<dto::AddLineRequest>,
) -> axum::response::Response {
    match services.lines.add_line(
        AdjustmentId::new(id),
        ProductId::new(body.product_id),
        body.quantity_delta,
    ) {
        Ok(msg) => message_response(StatusCode::CREATED, msg),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_line(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, line_id)): Path<(i64, i64)>,
) -> axum::response::Response {
    match services
        .lines
        .remove_line(AdjustmentId::new(id), LineId::new(line_id))
    {
        Ok(msg) => message_response(StatusCode::OK, msg),
        Err(e) => errors::domain_error_to_response(e),
    }
}
