use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A kamus row joined with the name of its negeri.
///
/// `negeri_name` is `None` when the referenced negeri no longer exists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KamusWithNegeri {
    pub id: i32,
    pub dialek: String,
    pub maksud: String,
    pub contoh_ayat: Option<String>,
    pub negeri_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub negeri_name: Option<String>,
}
