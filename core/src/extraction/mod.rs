pub mod headers;
pub mod tags;

pub use headers::{extract_image_header, extract_image_type, extract_series_header};
pub use tags::*;
