mod negeri_repository;

pub use negeri_repository::{NegeriRepository, PgNegeriRepository};
