use utoipa::{Modify, OpenApi};

use crate::features::kamus::{dtos as kamus_dtos, handlers as kamus_handlers};
use crate::features::negeri::{dtos as negeri_dtos, handlers as negeri_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Negeri
        negeri_handlers::create_negeri,
        negeri_handlers::list_negeri,
        negeri_handlers::get_negeri,
        negeri_handlers::update_negeri,
        negeri_handlers::delete_negeri,
        // Kamus
        kamus_handlers::create_kamus,
        kamus_handlers::list_kamus,
        kamus_handlers::list_kamus_by_negeri,
        kamus_handlers::get_kamus,
        kamus_handlers::update_kamus,
        kamus_handlers::delete_kamus,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Negeri
            negeri_dtos::CreateNegeriDto,
            negeri_dtos::UpdateNegeriDto,
            negeri_dtos::NegeriResponseDto,
            ApiResponse<negeri_dtos::NegeriResponseDto>,
            ApiResponse<Vec<negeri_dtos::NegeriResponseDto>>,
            // Kamus
            kamus_dtos::CreateKamusDto,
            kamus_dtos::UpdateKamusDto,
            kamus_dtos::NegeriSummaryDto,
            kamus_dtos::KamusResponseDto,
            ApiResponse<kamus_dtos::KamusResponseDto>,
            ApiResponse<Vec<kamus_dtos::KamusResponseDto>>,
        )
    ),
    tags(
        (name = "negeri", description = "Malaysian states"),
        (name = "kamus", description = "Dialect dictionary entries"),
    ),
    info(
        title = "Kamus Negeri API",
        version = "0.1.0",
        description = "API for the Malaysian states dialect dictionary",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
