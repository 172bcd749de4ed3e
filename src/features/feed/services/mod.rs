mod content_joiner;
mod feed_service;
mod metadata_resolver;
mod page_selector;

pub use content_joiner::ContentJoiner;
pub use feed_service::{FeedRequest, FeedService};
pub use metadata_resolver::MetadataResolver;
pub use page_selector::CategoryPageSelector;
