pub mod kamus_handler;

pub use kamus_handler::*;
