//! Image resize primitive and derivative addressing.

use std::io::Cursor;

use bytes::Bytes;
use image::imageops::FilterType;

use depot_core::error::{AppError, ErrorKind};
use depot_core::result::AppResult;

/// The fixed derivative widths, largest first.
///
/// The set and the `_<width>` suffix below form the wire contract between
/// upload, the derivative worker, and the retrieval path; both sides must
/// agree exactly, so neither is configurable.
pub const THUMBNAIL_WIDTHS: [u32; 3] = [500, 250, 100];

/// Build the blob address of a derivative for the given width.
pub fn variant_path(storage_path: &str, width: u32) -> String {
    format!("{storage_path}_{width}")
}

/// Resize an image to the target width, preserving aspect ratio.
///
/// A pure function of its inputs: the same bytes and width always produce
/// the same output, which is what makes duplicate job deliveries converge.
pub fn resize(data: &[u8], target_width: u32) -> AppResult<Bytes> {
    let img = image::load_from_memory(data).map_err(|e| {
        AppError::with_source(ErrorKind::Validation, format!("Failed to decode image: {e}"), e)
    })?;

    let scale = target_width as f64 / img.width() as f64;
    let target_height = ((img.height() as f64 * scale).round() as u32).max(1);
    let resized = img.resize_exact(target_width, target_height, FilterType::Triangle);

    let mut buf = Vec::new();
    let mut cursor = Cursor::new(&mut buf);
    resized
        .write_to(&mut cursor, image::ImageFormat::Png)
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Internal,
                format!("Failed to encode thumbnail: {e}"),
                e,
            )
        })?;

    Ok(Bytes::from(buf))
}
