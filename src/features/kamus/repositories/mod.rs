mod kamus_repository;

pub use kamus_repository::{KamusRepository, PgKamusRepository};
