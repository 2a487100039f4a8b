//! Dialect dictionary (kamus) feature.
//!
//! Every entry belongs to exactly one negeri. The referenced negeri must exist
//! when an entry is created or moved to another negeri; reads return the entry
//! with an embedded `{id, name}` summary of its negeri.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/kamus` | Create an entry |
//! | GET | `/api/kamus` | List entries, `?dialek=` filters by substring |
//! | GET | `/api/kamus/negeri/{negeri_id}` | List entries of a negeri |
//! | GET | `/api/kamus/{id}` | Get entry by id |
//! | PATCH | `/api/kamus/{id}` | Update an entry |
//! | DELETE | `/api/kamus/{id}` | Delete an entry |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{KamusRepository, PgKamusRepository};
pub use services::KamusService;
