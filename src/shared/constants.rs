/// Default page number when the request omits it
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size for plain news listings. The category feed is not capped.
pub const MAX_PAGE_SIZE: i64 = 100;
