mod negeri_service;

pub use negeri_service::NegeriService;
