//! Request extractors whose rejections come back as the JSON error envelope.

pub mod json;
pub mod page;
pub mod path;

pub use json::{ApiJson, JsonBody};
pub use page::PageParam;
pub use path::IntId;
