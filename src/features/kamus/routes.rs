use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::kamus::handlers;
use crate::features::kamus::services::KamusService;

/// Create routes for the kamus feature
pub fn routes(service: Arc<KamusService>) -> Router {
    Router::new()
        .route(
            "/api/kamus",
            get(handlers::list_kamus).post(handlers::create_kamus),
        )
        .route(
            "/api/kamus/negeri/{negeri_id}",
            get(handlers::list_kamus_by_negeri),
        )
        .route(
            "/api/kamus/{id}",
            get(handlers::get_kamus)
                .patch(handlers::update_kamus)
                .delete(handlers::delete_kamus),
        )
        .with_state(service)
}
