mod source;

pub use source::{NewSource, Source};
