//! In-memory catalog store and app wiring for unit tests.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;

use crate::core::config::NegeriDeletePolicy;
use crate::core::error::{AppError, Result};
use crate::features::kamus::dtos::{CreateKamusDto, UpdateKamusDto};
use crate::features::kamus::models::KamusWithNegeri;
use crate::features::kamus::{KamusRepository, KamusService};
use crate::features::negeri::dtos::UpdateNegeriDto;
use crate::features::negeri::models::Negeri;
use crate::features::negeri::{NegeriRepository, NegeriService};
use crate::shared::search::active_filter;

#[derive(Debug, Clone)]
struct KamusRow {
    id: i32,
    dialek: String,
    maksud: String,
    contoh_ayat: Option<String>,
    negeri_id: i32,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

#[derive(Debug, Default)]
struct CatalogState {
    negeri: Vec<Negeri>,
    kamus: Vec<KamusRow>,
    next_negeri_id: i32,
    next_kamus_id: i32,
    writes: usize,
}

impl CatalogState {
    fn joined(&self, row: &KamusRow) -> KamusWithNegeri {
        KamusWithNegeri {
            id: row.id,
            dialek: row.dialek.clone(),
            maksud: row.maksud.clone(),
            contoh_ayat: row.contoh_ayat.clone(),
            negeri_id: row.negeri_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            negeri_name: self
                .negeri
                .iter()
                .find(|n| n.id == row.negeri_id)
                .map(|n| n.name.clone()),
        }
    }

    fn name_taken(&self, name: &str, except: Option<i32>) -> bool {
        self.negeri
            .iter()
            .any(|n| n.name == name && Some(n.id) != except)
    }
}

/// Both storage ports over one shared, lock-protected state.
///
/// Mirrors the PostgreSQL adapters: serial ids starting at 1, a unique
/// negeri name, id-ordered listings and a left join for the negeri name.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
}

impl InMemoryCatalog {
    fn state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap()
    }

    /// Number of mutating calls that reached the store
    pub fn writes(&self) -> usize {
        self.state().writes
    }

    pub fn kamus_count(&self) -> usize {
        self.state().kamus.len()
    }

    /// Insert an entry directly, bypassing the service checks
    pub fn seed_kamus(&self, dialek: &str, negeri_id: i32) -> i32 {
        let mut state = self.state();
        state.next_kamus_id += 1;
        let id = state.next_kamus_id;
        let now = Utc::now();
        state.kamus.push(KamusRow {
            id,
            dialek: dialek.to_string(),
            maksud: format!("maksud {}", dialek),
            contoh_ayat: None,
            negeri_id,
            created_at: now,
            updated_at: now,
        });
        id
    }
}

#[async_trait]
impl NegeriRepository for InMemoryCatalog {
    async fn insert(&self, name: &str) -> Result<Negeri> {
        let mut state = self.state();
        state.writes += 1;
        if state.name_taken(name, None) {
            return Err(AppError::Conflict(format!(
                "Negeri with name '{}' already exists",
                name
            )));
        }

        state.next_negeri_id += 1;
        let now = Utc::now();
        let negeri = Negeri {
            id: state.next_negeri_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.negeri.push(negeri.clone());
        Ok(negeri)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Negeri>> {
        Ok(self.state().negeri.iter().find(|n| n.id == id).cloned())
    }

    async fn find_all(&self, name_filter: Option<&str>) -> Result<Vec<Negeri>> {
        let state = self.state();
        Ok(state
            .negeri
            .iter()
            .filter(|n| active_filter(name_filter).is_none_or(|term| n.name.contains(term)))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, changes: &UpdateNegeriDto) -> Result<Option<Negeri>> {
        let mut state = self.state();
        state.writes += 1;
        if let Some(name) = changes.name.as_deref() {
            if state.name_taken(name, Some(id)) {
                return Err(AppError::Conflict(format!(
                    "Negeri with name '{}' already exists",
                    name
                )));
            }
        }

        let Some(negeri) = state.negeri.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            negeri.name = name.clone();
        }
        negeri.updated_at = Utc::now();
        Ok(Some(negeri.clone()))
    }

    async fn count_kamus(&self, id: i32) -> Result<i64> {
        let count = self.state().kamus.iter().filter(|k| k.negeri_id == id).count();
        Ok(count as i64)
    }

    async fn delete(&self, id: i32, cascade: bool) -> Result<bool> {
        let mut state = self.state();
        state.writes += 1;
        if cascade {
            state.kamus.retain(|k| k.negeri_id != id);
        }
        let before = state.negeri.len();
        state.negeri.retain(|n| n.id != id);
        Ok(state.negeri.len() < before)
    }
}

#[async_trait]
impl KamusRepository for InMemoryCatalog {
    async fn insert(&self, new: &CreateKamusDto) -> Result<KamusWithNegeri> {
        let mut state = self.state();
        state.writes += 1;
        state.next_kamus_id += 1;
        let now = Utc::now();
        let row = KamusRow {
            id: state.next_kamus_id,
            dialek: new.dialek.clone(),
            maksud: new.maksud.clone(),
            contoh_ayat: new.contoh_ayat.clone(),
            negeri_id: new.negeri_id,
            created_at: now,
            updated_at: now,
        };
        let joined = state.joined(&row);
        state.kamus.push(row);
        Ok(joined)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<KamusWithNegeri>> {
        let state = self.state();
        Ok(state
            .kamus
            .iter()
            .find(|k| k.id == id)
            .map(|k| state.joined(k)))
    }

    async fn find_all(&self, dialek_filter: Option<&str>) -> Result<Vec<KamusWithNegeri>> {
        let state = self.state();
        Ok(state
            .kamus
            .iter()
            .filter(|k| active_filter(dialek_filter).is_none_or(|term| k.dialek.contains(term)))
            .map(|k| state.joined(k))
            .collect())
    }

    async fn find_by_negeri(&self, negeri_id: i32) -> Result<Vec<KamusWithNegeri>> {
        let state = self.state();
        Ok(state
            .kamus
            .iter()
            .filter(|k| k.negeri_id == negeri_id)
            .map(|k| state.joined(k))
            .collect())
    }

    async fn update(&self, id: i32, changes: &UpdateKamusDto) -> Result<Option<KamusWithNegeri>> {
        let mut state = self.state();
        state.writes += 1;
        let Some(row) = state.kamus.iter_mut().find(|k| k.id == id) else {
            return Ok(None);
        };
        if let Some(dialek) = &changes.dialek {
            row.dialek = dialek.clone();
        }
        if let Some(maksud) = &changes.maksud {
            row.maksud = maksud.clone();
        }
        if let Some(contoh_ayat) = &changes.contoh_ayat {
            row.contoh_ayat = Some(contoh_ayat.clone());
        }
        if let Some(negeri_id) = changes.negeri_id {
            row.negeri_id = negeri_id;
        }
        row.updated_at = Utc::now();
        let row = row.clone();
        Ok(Some(state.joined(&row)))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut state = self.state();
        state.writes += 1;
        let before = state.kamus.len();
        state.kamus.retain(|k| k.id != id);
        Ok(state.kamus.len() < before)
    }
}

/// Full API router over a fresh in-memory store
pub fn test_app(policy: NegeriDeletePolicy) -> (Router, Arc<InMemoryCatalog>) {
    let store = Arc::new(InMemoryCatalog::default());
    let negeri_service = Arc::new(NegeriService::new(store.clone(), policy));
    let kamus_service = Arc::new(KamusService::new(
        store.clone(),
        Arc::clone(&negeri_service),
    ));

    (
        crate::features::routes(negeri_service, kamus_service),
        store,
    )
}

/// Driver-level database error carrying a SQLSTATE code
#[derive(Debug)]
pub struct DriverError {
    pub code: &'static str,
}

impl DriverError {
    pub fn into_sqlx(self) -> sqlx::Error {
        sqlx::Error::Database(Box::new(self))
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "driver error {}", self.code)
    }
}

impl std::error::Error for DriverError {}

impl sqlx::error::DatabaseError for DriverError {
    fn message(&self) -> &str {
        "driver error"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> sqlx::error::ErrorKind {
        match self.code {
            "23505" => sqlx::error::ErrorKind::UniqueViolation,
            _ => sqlx::error::ErrorKind::Other,
        }
    }
}
