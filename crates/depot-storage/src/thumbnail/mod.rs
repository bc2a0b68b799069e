//! Thumbnail derivatives: the resize primitive and the derivative
//! address convention.

pub mod resizer;

pub use resizer::{THUMBNAIL_WIDTHS, resize, variant_path};
