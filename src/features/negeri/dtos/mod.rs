mod negeri_dto;

pub use negeri_dto::{CreateNegeriDto, NegeriResponseDto, NegeriSearchQuery, UpdateNegeriDto};
