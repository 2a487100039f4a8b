//! Malaysian states (negeri) feature.
//!
//! Owns the canonical list of states. Names are unique; lookups by id are used
//! by the kamus feature to check references before every write.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/negeri` | Create a negeri |
//! | GET | `/api/negeri` | List negeri, `?name=` filters by substring |
//! | GET | `/api/negeri/{id}` | Get negeri by id |
//! | PATCH | `/api/negeri/{id}` | Update a negeri |
//! | DELETE | `/api/negeri/{id}` | Delete a negeri |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{NegeriRepository, PgNegeriRepository};
pub use services::NegeriService;
