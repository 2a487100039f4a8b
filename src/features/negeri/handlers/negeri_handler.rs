use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::negeri::dtos::{
    CreateNegeriDto, NegeriResponseDto, NegeriSearchQuery, UpdateNegeriDto,
};
use crate::features::negeri::services::NegeriService;
use crate::shared::types::{ApiResponse, Meta};

/// Create a new negeri
#[utoipa::path(
    post,
    path = "/api/negeri",
    request_body = CreateNegeriDto,
    responses(
        (status = 201, description = "Negeri created successfully", body = ApiResponse<NegeriResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Negeri with this name already exists")
    ),
    tag = "negeri"
)]
pub async fn create_negeri(
    State(service): State<Arc<NegeriService>>,
    AppJson(dto): AppJson<CreateNegeriDto>,
) -> Result<(StatusCode, Json<ApiResponse<NegeriResponseDto>>)> {
    let negeri = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(negeri.into()), None, None)),
    ))
}

/// List all negeri or search by name
#[utoipa::path(
    get,
    path = "/api/negeri",
    params(NegeriSearchQuery),
    responses(
        (status = 200, description = "List of negeri", body = ApiResponse<Vec<NegeriResponseDto>>)
    ),
    tag = "negeri"
)]
pub async fn list_negeri(
    State(service): State<Arc<NegeriService>>,
    Query(query): Query<NegeriSearchQuery>,
) -> Result<Json<ApiResponse<Vec<NegeriResponseDto>>>> {
    let negeri = service.list(query.name.as_deref()).await?;
    let dtos: Vec<NegeriResponseDto> = negeri.into_iter().map(Into::into).collect();
    let meta = Meta::with_total(dtos.len());
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// Get a negeri by id
#[utoipa::path(
    get,
    path = "/api/negeri/{id}",
    params(
        ("id" = i32, Path, description = "Negeri ID")
    ),
    responses(
        (status = 200, description = "Negeri details", body = ApiResponse<NegeriResponseDto>),
        (status = 404, description = "Negeri not found")
    ),
    tag = "negeri"
)]
pub async fn get_negeri(
    State(service): State<Arc<NegeriService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<NegeriResponseDto>>> {
    let negeri = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(negeri.into()), None, None)))
}

/// Update a negeri
#[utoipa::path(
    patch,
    path = "/api/negeri/{id}",
    params(
        ("id" = i32, Path, description = "Negeri ID")
    ),
    request_body = UpdateNegeriDto,
    responses(
        (status = 200, description = "Negeri updated successfully", body = ApiResponse<NegeriResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Negeri not found"),
        (status = 409, description = "Negeri with this name already exists")
    ),
    tag = "negeri"
)]
pub async fn update_negeri(
    State(service): State<Arc<NegeriService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateNegeriDto>,
) -> Result<Json<ApiResponse<NegeriResponseDto>>> {
    let negeri = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(negeri.into()), None, None)))
}

/// Delete a negeri
#[utoipa::path(
    delete,
    path = "/api/negeri/{id}",
    params(
        ("id" = i32, Path, description = "Negeri ID")
    ),
    responses(
        (status = 200, description = "Negeri deleted successfully"),
        (status = 404, description = "Negeri not found"),
        (status = 409, description = "Negeri still has kamus entries (restrict policy)")
    ),
    tag = "negeri"
)]
pub async fn delete_negeri(
    State(service): State<Arc<NegeriService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
