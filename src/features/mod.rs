pub mod categories;
pub mod feed;
pub mod news;
pub mod sources;
