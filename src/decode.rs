use std::path::Path;

use image::imageops::FilterType;

use crate::core::{Frame, FrameSize};
use crate::error::{FramegridError, FramegridResult};

/// Decode one source image and resize it to `size`.
///
/// The codec is forced to RGBA8 regardless of the source channel layout;
/// resampling uses a triangle (linear) filter applied independently per
/// channel. Any read or decode failure maps to [`FramegridError::Decode`]
/// so callers can treat the whole step as one recoverable unit.
pub fn decode_frame(path: &Path, size: FrameSize) -> FramegridResult<Frame> {
    let bytes = std::fs::read(path)
        .map_err(|e| FramegridError::decode(format!("read '{}': {e}", path.display())))?;

    let dyn_img = image::load_from_memory(&bytes)
        .map_err(|e| FramegridError::decode(format!("decode '{}': {e}", path.display())))?;
    let rgba = dyn_img.to_rgba8();

    let resized = image::imageops::resize(&rgba, size.width, size.height, FilterType::Triangle);

    Frame::from_pixels(size, resized.into_raw())
}
