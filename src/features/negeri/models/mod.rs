mod negeri;

pub use negeri::Negeri;
