mod kamus;

pub use kamus::KamusWithNegeri;
