use axum::Router;

pub mod adjustments;
pub mod products;
pub mod system;

/// Router for all back office endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/adjustments", adjustments::router())
        .nest("/products", products::router())
}
