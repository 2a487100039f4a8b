use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::negeri::models::Negeri;

/// Query parameters for listing negeri
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct NegeriSearchQuery {
    /// Filter by name (case-sensitive substring match)
    #[param(example = "Selangor")]
    pub name: Option<String>,
}

// Create request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateNegeriDto {
    /// The name of the Malaysian state
    #[schema(example = "Selangor")]
    #[validate(
        length(max = 255),
        custom(function = "crate::shared::validation::not_blank")
    )]
    pub name: String,
}

// Update request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateNegeriDto {
    #[schema(example = "Pulau Pinang")]
    #[validate(
        length(max = 255),
        custom(function = "crate::shared::validation::not_blank")
    )]
    pub name: Option<String>,
}

impl UpdateNegeriDto {
    /// True when the request carries no field to change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

// Response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NegeriResponseDto {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Negeri> for NegeriResponseDto {
    fn from(negeri: Negeri) -> Self {
        Self {
            id: negeri.id,
            name: negeri.name,
            created_at: negeri.created_at,
            updated_at: negeri.updated_at,
        }
    }
}
