use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{map_unique_violation, AppError, Result};
use crate::features::negeri::dtos::UpdateNegeriDto;
use crate::features::negeri::models::Negeri;
use crate::shared::search::{active_filter, contains_pattern};

/// Storage port for negeri records.
///
/// Implementations enforce name uniqueness and report a duplicate as
/// `AppError::Conflict`.
#[async_trait]
pub trait NegeriRepository: Send + Sync {
    /// Insert a new negeri, assigning its id.
    async fn insert(&self, name: &str) -> Result<Negeri>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Negeri>>;

    /// All negeri in storage order, optionally filtered by name substring.
    async fn find_all(&self, name_filter: Option<&str>) -> Result<Vec<Negeri>>;

    /// Apply the present fields. Returns `None` when the id does not exist.
    async fn update(&self, id: i32, changes: &UpdateNegeriDto) -> Result<Option<Negeri>>;

    /// Number of kamus entries referencing this negeri.
    async fn count_kamus(&self, id: i32) -> Result<i64>;

    /// Delete a negeri, and its kamus entries too when `cascade` is set.
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: i32, cascade: bool) -> Result<bool>;
}

/// PostgreSQL-backed negeri repository
pub struct PgNegeriRepository {
    pool: PgPool,
}

impl PgNegeriRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn duplicate_name(name: &str) -> impl FnOnce() -> String + '_ {
    move || format!("Negeri with name '{}' already exists", name)
}

#[async_trait]
impl NegeriRepository for PgNegeriRepository {
    async fn insert(&self, name: &str) -> Result<Negeri> {
        sqlx::query_as::<_, Negeri>(
            r#"
            INSERT INTO negeri (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, duplicate_name(name)))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Negeri>> {
        sqlx::query_as::<_, Negeri>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM negeri
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch negeri {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn find_all(&self, name_filter: Option<&str>) -> Result<Vec<Negeri>> {
        match active_filter(name_filter) {
            Some(term) => {
                sqlx::query_as::<_, Negeri>(
                    r#"
                    SELECT id, name, created_at, updated_at
                    FROM negeri
                    WHERE name LIKE $1
                    ORDER BY id ASC
                    "#,
                )
                .bind(contains_pattern(term))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Negeri>(
                    r#"
                    SELECT id, name, created_at, updated_at
                    FROM negeri
                    ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list negeri: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: i32, changes: &UpdateNegeriDto) -> Result<Option<Negeri>> {
        let conflicting = changes.name.as_deref().unwrap_or_default();

        sqlx::query_as::<_, Negeri>(
            r#"
            UPDATE negeri
            SET name = COALESCE($1, name),
                updated_at = NOW()
            WHERE id = $2
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(changes.name.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, duplicate_name(conflicting)))
    }

    async fn count_kamus(&self, id: i32) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM kamus WHERE negeri_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count kamus for negeri {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: i32, cascade: bool) -> Result<bool> {
        let db_error = |e: sqlx::Error| {
            tracing::error!("Failed to delete negeri {}: {:?}", id, e);
            AppError::Database(e)
        };

        let mut tx = self.pool.begin().await.map_err(db_error)?;

        if cascade {
            let removed = sqlx::query("DELETE FROM kamus WHERE negeri_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(db_error)?
                .rows_affected();
            tracing::debug!("Cascade removed {} kamus entries of negeri {}", removed, id);
        }

        let deleted = sqlx::query("DELETE FROM negeri WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?
            .rows_affected();

        tx.commit().await.map_err(db_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::DriverError;

    #[test]
    fn test_duplicate_name_maps_to_conflict_message() {
        let driver = DriverError { code: "23505" }.into_sqlx();

        let err = map_unique_violation(driver, duplicate_name("Selangor"));

        assert!(
            matches!(err, AppError::Conflict(ref msg) if msg == "Negeri with name 'Selangor' already exists")
        );
    }
}
