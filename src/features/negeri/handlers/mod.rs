pub mod negeri_handler;

pub use negeri_handler::*;
