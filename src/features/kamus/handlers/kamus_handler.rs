use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::kamus::dtos::{
    CreateKamusDto, KamusResponseDto, KamusSearchQuery, UpdateKamusDto,
};
use crate::features::kamus::models::KamusWithNegeri;
use crate::features::kamus::services::KamusService;
use crate::shared::types::{ApiResponse, Meta};

fn list_response(entries: Vec<KamusWithNegeri>) -> Json<ApiResponse<Vec<KamusResponseDto>>> {
    let dtos: Vec<KamusResponseDto> = entries.into_iter().map(Into::into).collect();
    let meta = Meta::with_total(dtos.len());
    Json(ApiResponse::success(Some(dtos), None, Some(meta)))
}

/// Create a new kamus entry
#[utoipa::path(
    post,
    path = "/api/kamus",
    request_body = CreateKamusDto,
    responses(
        (status = 201, description = "Kamus entry created successfully", body = ApiResponse<KamusResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced negeri not found")
    ),
    tag = "kamus"
)]
pub async fn create_kamus(
    State(service): State<Arc<KamusService>>,
    AppJson(dto): AppJson<CreateKamusDto>,
) -> Result<(StatusCode, Json<ApiResponse<KamusResponseDto>>)> {
    let kamus = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(kamus.into()), None, None)),
    ))
}

/// List all kamus entries or search by dialek
#[utoipa::path(
    get,
    path = "/api/kamus",
    params(KamusSearchQuery),
    responses(
        (status = 200, description = "List of kamus entries", body = ApiResponse<Vec<KamusResponseDto>>)
    ),
    tag = "kamus"
)]
pub async fn list_kamus(
    State(service): State<Arc<KamusService>>,
    Query(query): Query<KamusSearchQuery>,
) -> Result<Json<ApiResponse<Vec<KamusResponseDto>>>> {
    let entries = service.list(query.dialek.as_deref()).await?;
    Ok(list_response(entries))
}

/// List kamus entries of a negeri
#[utoipa::path(
    get,
    path = "/api/kamus/negeri/{negeri_id}",
    params(
        ("negeri_id" = i32, Path, description = "Negeri ID")
    ),
    responses(
        (status = 200, description = "Kamus entries of the negeri", body = ApiResponse<Vec<KamusResponseDto>>),
        (status = 404, description = "Negeri not found")
    ),
    tag = "kamus"
)]
pub async fn list_kamus_by_negeri(
    State(service): State<Arc<KamusService>>,
    AppPath(negeri_id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<KamusResponseDto>>>> {
    let entries = service.list_by_negeri(negeri_id).await?;
    Ok(list_response(entries))
}

/// Get a kamus entry by id
#[utoipa::path(
    get,
    path = "/api/kamus/{id}",
    params(
        ("id" = i32, Path, description = "Kamus entry ID")
    ),
    responses(
        (status = 200, description = "Kamus entry details", body = ApiResponse<KamusResponseDto>),
        (status = 404, description = "Kamus entry not found")
    ),
    tag = "kamus"
)]
pub async fn get_kamus(
    State(service): State<Arc<KamusService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<KamusResponseDto>>> {
    let kamus = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(kamus.into()), None, None)))
}

/// Update a kamus entry
#[utoipa::path(
    patch,
    path = "/api/kamus/{id}",
    params(
        ("id" = i32, Path, description = "Kamus entry ID")
    ),
    request_body = UpdateKamusDto,
    responses(
        (status = 200, description = "Kamus entry updated successfully", body = ApiResponse<KamusResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Kamus entry or referenced negeri not found")
    ),
    tag = "kamus"
)]
pub async fn update_kamus(
    State(service): State<Arc<KamusService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateKamusDto>,
) -> Result<Json<ApiResponse<KamusResponseDto>>> {
    let kamus = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(kamus.into()), None, None)))
}

/// Delete a kamus entry
#[utoipa::path(
    delete,
    path = "/api/kamus/{id}",
    params(
        ("id" = i32, Path, description = "Kamus entry ID")
    ),
    responses(
        (status = 200, description = "Kamus entry deleted successfully"),
        (status = 404, description = "Kamus entry not found")
    ),
    tag = "kamus"
)]
pub async fn delete_kamus(
    State(service): State<Arc<KamusService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
