pub mod kamus;
pub mod negeri;

use std::sync::Arc;

use axum::Router;

use crate::features::kamus::KamusService;
use crate::features::negeri::NegeriService;

/// Routes of every catalog feature
pub fn routes(negeri_service: Arc<NegeriService>, kamus_service: Arc<KamusService>) -> Router {
    Router::new()
        .merge(negeri::routes::routes(negeri_service))
        .merge(kamus::routes::routes(kamus_service))
}
