mod kamus_dto;

pub use kamus_dto::{
    CreateKamusDto, KamusResponseDto, KamusSearchQuery, NegeriSummaryDto, UpdateKamusDto,
};
