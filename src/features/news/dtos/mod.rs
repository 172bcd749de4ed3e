mod news_dto;

pub use news_dto::{NewsListQuery, NewsResponseDto};
