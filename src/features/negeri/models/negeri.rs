use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A Malaysian state
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Negeri {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
