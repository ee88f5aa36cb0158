use std::io::{BufWriter, Write as _};
use std::path::Path;

use serde::Serialize;

use crate::core::FrameStore;
use crate::error::{FramegridError, FramegridResult};

/// Default location of the serialized dataset, relative to the working
/// directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output/frame_data.json";

/// The dataset document: frame geometry plus one pixel array per source
/// image, in enumeration order. Pixels are row-major; each pixel is a
/// `[r, g, b, a]` array in decode channel order.
#[derive(Serialize)]
pub struct OutputDocument {
    width: u32,
    height: u32,
    channels: u32,
    frames: Vec<Vec<[u8; 4]>>,
}

impl OutputDocument {
    pub fn from_store(store: &FrameStore) -> Self {
        let size = store.size();
        let frames = store
            .frames()
            .iter()
            .map(|frame| {
                frame
                    .pixels
                    .chunks_exact(size.channels as usize)
                    .map(|px| [px[0], px[1], px[2], px[3]])
                    .collect()
            })
            .collect();

        Self {
            width: size.width,
            height: size.height,
            channels: size.channels,
            frames,
        }
    }
}

/// Serialize `store` to `path` as JSON, creating intermediate directories.
///
/// This stage is all-or-nothing: any create/write failure maps to the fatal
/// [`FramegridError::Output`] variant.
pub fn write_document(store: &FrameStore, path: &Path) -> FramegridResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            FramegridError::output(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    let file = std::fs::File::create(path)
        .map_err(|e| FramegridError::output(format!("create '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, &OutputDocument::from_store(store))
        .map_err(|e| FramegridError::output(format!("write '{}': {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| FramegridError::output(format!("flush '{}': {e}", path.display())))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Frame, FrameSize, FrameStore};

    fn tiny_store() -> FrameStore {
        let size = FrameSize::new(1, 2, 4).unwrap();
        let frame = Frame::from_pixels(size, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        FrameStore::new(size, vec![frame, Frame::unpopulated(size)]).unwrap()
    }

    #[test]
    fn document_shape_matches_contract() {
        let doc = OutputDocument::from_store(&tiny_store());
        let v: serde_json::Value = serde_json::to_value(&doc).unwrap();

        assert_eq!(v["width"], 1);
        assert_eq!(v["height"], 2);
        assert_eq!(v["channels"], 4);
        let frames = v["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0][0], serde_json::json!([1, 2, 3, 4]));
        assert_eq!(frames[0][1], serde_json::json!([5, 6, 7, 8]));
        assert_eq!(frames[1][0], serde_json::json!([0, 0, 0, 0]));
    }

    #[test]
    fn write_creates_intermediate_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b").join("frame_data.json");
        write_document(&tiny_store(), &out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["frames"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn unwritable_destination_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        // a file where a directory is needed
        std::fs::write(dir.path().join("blocked"), b"x").unwrap();
        let out = dir.path().join("blocked").join("frame_data.json");
        let err = write_document(&tiny_store(), &out).unwrap_err();
        assert!(matches!(err, FramegridError::Output(_)));
    }
}
