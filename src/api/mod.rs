//! Image and utility endpoints.

pub mod captcha;
pub mod color;
pub mod dominant;
pub mod preview;
pub mod random_color;
pub mod round;

pub use captcha::{captcha_image, captcha_solution};
pub use dominant::dominant_colors;
pub use preview::preview_color;
pub use random_color::random_color;
pub use round::round_image;

use crate::error::ApiError;
use axum::body::Bytes;
use image::{io::Reader, ImageBuffer, Rgba};
use std::io::Cursor;

/// Decodes fetched bytes into an RGBA buffer, guessing the format from the
/// content.
pub(crate) fn decode_rgba(bytes: Bytes) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>, ApiError> {
    let reader = Reader::new(Cursor::new(bytes)).with_guessed_format()?;
    Ok(reader.decode()?.to_rgba8())
}
