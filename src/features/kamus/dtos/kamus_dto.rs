use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::kamus::models::KamusWithNegeri;

/// Query parameters for listing kamus entries
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct KamusSearchQuery {
    /// Filter by dialect word (case-sensitive substring match)
    #[param(example = "Hang")]
    pub dialek: Option<String>,
}

// Create request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateKamusDto {
    /// The dialect or local word
    #[schema(example = "Hangpa")]
    #[validate(
        length(max = 255),
        custom(function = "crate::shared::validation::not_blank")
    )]
    pub dialek: String,

    /// The meaning of the dialect word
    #[schema(example = "Kamu semua")]
    #[validate(custom(function = "crate::shared::validation::not_blank"))]
    pub maksud: String,

    /// Example sentence using the dialect word
    #[schema(example = "Hangpa nak pergi mana?")]
    pub contoh_ayat: Option<String>,

    /// The ID of the negeri this dialect belongs to
    #[schema(example = 1)]
    #[validate(range(min = 1))]
    pub negeri_id: i32,
}

// Update request, absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateKamusDto {
    #[validate(
        length(max = 255),
        custom(function = "crate::shared::validation::not_blank")
    )]
    pub dialek: Option<String>,

    #[validate(custom(function = "crate::shared::validation::not_blank"))]
    pub maksud: Option<String>,

    pub contoh_ayat: Option<String>,

    #[validate(range(min = 1))]
    pub negeri_id: Option<i32>,
}

impl UpdateKamusDto {
    pub fn is_empty(&self) -> bool {
        self.dialek.is_none()
            && self.maksud.is_none()
            && self.contoh_ayat.is_none()
            && self.negeri_id.is_none()
    }
}

/// Summary of the negeri an entry belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NegeriSummaryDto {
    pub id: i32,
    pub name: String,
}

// Response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KamusResponseDto {
    pub id: i32,
    pub dialek: String,
    pub maksud: String,
    pub contoh_ayat: Option<String>,
    pub negeri_id: i32,
    /// `null` when the referenced negeri has been deleted
    pub negeri: Option<NegeriSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<KamusWithNegeri> for KamusResponseDto {
    fn from(k: KamusWithNegeri) -> Self {
        Self {
            id: k.id,
            negeri: k.negeri_name.map(|name| NegeriSummaryDto {
                id: k.negeri_id,
                name,
            }),
            dialek: k.dialek,
            maksud: k.maksud,
            contoh_ayat: k.contoh_ayat,
            negeri_id: k.negeri_id,
            created_at: k.created_at,
            updated_at: k.updated_at,
        }
    }
}
