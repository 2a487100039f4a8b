use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::kamus::dtos::{CreateKamusDto, UpdateKamusDto};
use crate::features::kamus::models::KamusWithNegeri;
use crate::features::kamus::repositories::KamusRepository;
use crate::features::negeri::NegeriService;

pub const ENTITY: &str = "Kamus";

/// Service for kamus entries and their reference to a negeri.
///
/// The negeri check and the following write are separate statements: a negeri
/// deleted between the two leaves the written entry pointing at a missing id.
pub struct KamusService {
    repo: Arc<dyn KamusRepository>,
    negeri_service: Arc<NegeriService>,
}

impl KamusService {
    pub fn new(repo: Arc<dyn KamusRepository>, negeri_service: Arc<NegeriService>) -> Self {
        Self {
            repo,
            negeri_service,
        }
    }

    /// Create an entry after confirming its negeri exists
    pub async fn create(&self, dto: CreateKamusDto) -> Result<KamusWithNegeri> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.negeri_service.get_by_id(dto.negeri_id).await?;

        let kamus = self.repo.insert(&dto).await?;
        tracing::info!(
            "Created kamus {} ({}) for negeri {}",
            kamus.id,
            kamus.dialek,
            kamus.negeri_id
        );

        Ok(kamus)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<KamusWithNegeri> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    /// List entries in storage order; an empty filter returns everything
    pub async fn list(&self, dialek: Option<&str>) -> Result<Vec<KamusWithNegeri>> {
        self.repo.find_all(dialek).await
    }

    pub async fn list_by_negeri(&self, negeri_id: i32) -> Result<Vec<KamusWithNegeri>> {
        self.negeri_service.get_by_id(negeri_id).await?;

        self.repo.find_by_negeri(negeri_id).await
    }

    /// Update an entry. A new `negeri_id` is checked before anything is written.
    pub async fn update(&self, id: i32, dto: UpdateKamusDto) -> Result<KamusWithNegeri> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let current = self.get_by_id(id).await?;

        if let Some(negeri_id) = dto.negeri_id {
            self.negeri_service.get_by_id(negeri_id).await?;
        }

        if dto.is_empty() {
            return Ok(current);
        }

        let kamus = self
            .repo
            .update(id, &dto)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))?;
        tracing::info!("Updated kamus {} ({})", kamus.id, kamus.dialek);

        Ok(kamus)
    }

    /// Delete an entry; its negeri is left untouched
    pub async fn delete(&self, id: i32) -> Result<()> {
        self.get_by_id(id).await?;

        if !self.repo.delete(id).await? {
            return Err(AppError::not_found(ENTITY, id));
        }
        tracing::info!("Deleted kamus {}", id);

        Ok(())
    }
}
