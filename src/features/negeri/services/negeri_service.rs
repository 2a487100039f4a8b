use std::sync::Arc;

use validator::Validate;

use crate::core::config::NegeriDeletePolicy;
use crate::core::error::{AppError, Result};
use crate::features::negeri::dtos::{CreateNegeriDto, UpdateNegeriDto};
use crate::features::negeri::models::Negeri;
use crate::features::negeri::repositories::NegeriRepository;

pub const ENTITY: &str = "Negeri";

/// Service for the state registry
pub struct NegeriService {
    repo: Arc<dyn NegeriRepository>,
    delete_policy: NegeriDeletePolicy,
}

impl NegeriService {
    pub fn new(repo: Arc<dyn NegeriRepository>, delete_policy: NegeriDeletePolicy) -> Self {
        Self {
            repo,
            delete_policy,
        }
    }

    /// Create a negeri. Duplicate names are rejected with `Conflict`.
    pub async fn create(&self, dto: CreateNegeriDto) -> Result<Negeri> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let negeri = self.repo.insert(&dto.name).await?;
        tracing::info!("Created negeri {} ({})", negeri.id, negeri.name);

        Ok(negeri)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Negeri> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    /// List negeri in storage order; an empty filter returns everything
    pub async fn list(&self, name: Option<&str>) -> Result<Vec<Negeri>> {
        self.repo.find_all(name).await
    }

    pub async fn update(&self, id: i32, dto: UpdateNegeriDto) -> Result<Negeri> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let current = self.get_by_id(id).await?;

        if dto.is_empty() {
            return Ok(current);
        }

        let negeri = self
            .repo
            .update(id, &dto)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))?;
        tracing::info!("Updated negeri {} ({})", negeri.id, negeri.name);

        Ok(negeri)
    }

    /// Delete a negeri, handling its kamus entries per the configured policy.
    ///
    /// The dependent check under `Restrict` and the delete are separate
    /// statements, so a kamus entry created in between is not seen.
    pub async fn delete(&self, id: i32) -> Result<()> {
        self.get_by_id(id).await?;

        let cascade = match self.delete_policy {
            NegeriDeletePolicy::Unguarded => false,
            NegeriDeletePolicy::Cascade => true,
            NegeriDeletePolicy::Restrict => {
                let dependents = self.repo.count_kamus(id).await?;
                if dependents > 0 {
                    return Err(AppError::Conflict(format!(
                        "Negeri with ID {} still has {} kamus entries",
                        id, dependents
                    )));
                }
                false
            }
        };

        if !self.repo.delete(id, cascade).await? {
            return Err(AppError::not_found(ENTITY, id));
        }
        tracing::info!(
            "Deleted negeri {} (policy: {})",
            id,
            self.delete_policy
        );

        Ok(())
    }
}
