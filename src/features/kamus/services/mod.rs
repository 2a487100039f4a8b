mod kamus_service;

pub use kamus_service::KamusService;
