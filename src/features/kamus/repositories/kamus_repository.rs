use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::kamus::dtos::{CreateKamusDto, UpdateKamusDto};
use crate::features::kamus::models::KamusWithNegeri;
use crate::shared::search::{active_filter, contains_pattern};

/// Storage port for kamus entries.
///
/// Every read returns the entry joined with its negeri name; the join is a
/// left join so entries of a deleted negeri are still returned.
#[async_trait]
pub trait KamusRepository: Send + Sync {
    async fn insert(&self, new: &CreateKamusDto) -> Result<KamusWithNegeri>;

    async fn find_by_id(&self, id: i32) -> Result<Option<KamusWithNegeri>>;

    /// All entries in storage order, optionally filtered by dialek substring.
    async fn find_all(&self, dialek_filter: Option<&str>) -> Result<Vec<KamusWithNegeri>>;

    async fn find_by_negeri(&self, negeri_id: i32) -> Result<Vec<KamusWithNegeri>>;

    /// Apply the present fields. Returns `None` when the id does not exist.
    async fn update(&self, id: i32, changes: &UpdateKamusDto) -> Result<Option<KamusWithNegeri>>;

    async fn delete(&self, id: i32) -> Result<bool>;
}

/// PostgreSQL-backed kamus repository
pub struct PgKamusRepository {
    pool: PgPool,
}

impl PgKamusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_WITH_NEGERI: &str = r#"
    SELECT k.id, k.dialek, k.maksud, k.contoh_ayat, k.negeri_id,
           k.created_at, k.updated_at, n.name AS negeri_name
    FROM kamus k
    LEFT JOIN negeri n ON n.id = k.negeri_id
"#;

#[async_trait]
impl KamusRepository for PgKamusRepository {
    async fn insert(&self, new: &CreateKamusDto) -> Result<KamusWithNegeri> {
        sqlx::query_as::<_, KamusWithNegeri>(
            r#"
            WITH k AS (
                INSERT INTO kamus (dialek, maksud, contoh_ayat, negeri_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, dialek, maksud, contoh_ayat, negeri_id, created_at, updated_at
            )
            SELECT k.id, k.dialek, k.maksud, k.contoh_ayat, k.negeri_id,
                   k.created_at, k.updated_at, n.name AS negeri_name
            FROM k
            LEFT JOIN negeri n ON n.id = k.negeri_id
            "#,
        )
        .bind(&new.dialek)
        .bind(&new.maksud)
        .bind(new.contoh_ayat.as_deref())
        .bind(new.negeri_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert kamus '{}': {:?}", new.dialek, e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<KamusWithNegeri>> {
        let query = format!("{} WHERE k.id = $1", SELECT_WITH_NEGERI);

        sqlx::query_as::<_, KamusWithNegeri>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch kamus {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn find_all(&self, dialek_filter: Option<&str>) -> Result<Vec<KamusWithNegeri>> {
        match active_filter(dialek_filter) {
            Some(term) => {
                let query = format!(
                    "{} WHERE k.dialek LIKE $1 ORDER BY k.id ASC",
                    SELECT_WITH_NEGERI
                );
                sqlx::query_as::<_, KamusWithNegeri>(&query)
                    .bind(contains_pattern(term))
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!("{} ORDER BY k.id ASC", SELECT_WITH_NEGERI);
                sqlx::query_as::<_, KamusWithNegeri>(&query)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list kamus: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_negeri(&self, negeri_id: i32) -> Result<Vec<KamusWithNegeri>> {
        let query = format!(
            "{} WHERE k.negeri_id = $1 ORDER BY k.id ASC",
            SELECT_WITH_NEGERI
        );

        sqlx::query_as::<_, KamusWithNegeri>(&query)
            .bind(negeri_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list kamus for negeri {}: {:?}", negeri_id, e);
                AppError::Database(e)
            })
    }

    async fn update(&self, id: i32, changes: &UpdateKamusDto) -> Result<Option<KamusWithNegeri>> {
        sqlx::query_as::<_, KamusWithNegeri>(
            r#"
            WITH k AS (
                UPDATE kamus
                SET dialek = COALESCE($1, dialek),
                    maksud = COALESCE($2, maksud),
                    contoh_ayat = COALESCE($3, contoh_ayat),
                    negeri_id = COALESCE($4, negeri_id),
                    updated_at = NOW()
                WHERE id = $5
                RETURNING id, dialek, maksud, contoh_ayat, negeri_id, created_at, updated_at
            )
            SELECT k.id, k.dialek, k.maksud, k.contoh_ayat, k.negeri_id,
                   k.created_at, k.updated_at, n.name AS negeri_name
            FROM k
            LEFT JOIN negeri n ON n.id = k.negeri_id
            "#,
        )
        .bind(changes.dialek.as_deref())
        .bind(changes.maksud.as_deref())
        .bind(changes.contoh_ayat.as_deref())
        .bind(changes.negeri_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update kamus {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM kamus WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete kamus {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
