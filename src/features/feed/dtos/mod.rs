mod feed_dto;

pub use feed_dto::{CategoryWithNewsDto, FeedQuery};
