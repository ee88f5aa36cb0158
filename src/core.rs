use crate::error::{FramegridError, FramegridResult};

/// Geometry of every frame in a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
}

impl FrameSize {
    /// The build-time reference configuration: 64x64 RGBA.
    pub const DEFAULT: FrameSize = FrameSize {
        width: 64,
        height: 64,
        channels: 4,
    };

    pub fn new(width: u32, height: u32, channels: u32) -> FramegridResult<Self> {
        if width == 0 || height == 0 {
            return Err(FramegridError::resize("FrameSize dimensions must be > 0"));
        }
        if channels != 4 {
            return Err(FramegridError::resize("FrameSize channels must be 4 (RGBA)"));
        }
        Ok(Self {
            width,
            height,
            channels,
        })
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total byte length of one frame buffer.
    pub fn byte_len(self) -> usize {
        self.pixel_count() * self.channels as usize
    }
}

/// One resized source image as straight RGBA8, row-major.
///
/// A frame is either *populated* (decode + resize succeeded) or left in its
/// *unpopulated* all-zero state when the source failed. Both states are
/// serializable; the zero frame is the defined fallback for bad inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub size: FrameSize,
    pub pixels: Vec<u8>,
    pub populated: bool,
}

impl Frame {
    pub fn from_pixels(size: FrameSize, pixels: Vec<u8>) -> FramegridResult<Self> {
        if pixels.len() != size.byte_len() {
            return Err(FramegridError::resize(format!(
                "frame buffer is {} bytes, expected {}",
                pixels.len(),
                size.byte_len()
            )));
        }
        Ok(Self {
            size,
            pixels,
            populated: true,
        })
    }

    pub fn unpopulated(size: FrameSize) -> Self {
        Self {
            size,
            pixels: vec![0u8; size.byte_len()],
            populated: false,
        }
    }
}

/// Ordered, index-addressable collection of frames, 1:1 with the enumerated
/// source order. Pre-sized before any worker starts; stable after all
/// workers have joined.
#[derive(Clone, Debug)]
pub struct FrameStore {
    size: FrameSize,
    frames: Vec<Frame>,
}

impl FrameStore {
    pub fn new(size: FrameSize, frames: Vec<Frame>) -> FramegridResult<Self> {
        if let Some(bad) = frames.iter().position(|f| f.size != size) {
            return Err(FramegridError::resize(format!(
                "frame {bad} does not match the store geometry"
            )));
        }
        Ok(Self { size, frames })
    }

    pub fn size(&self) -> FrameSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

/// Counters for one pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub frames_total: u64,
    pub frames_decoded: u64,
    pub frames_failed: u64,
}
