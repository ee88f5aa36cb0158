//! Framegrid converts a directory of still images into one structured
//! dataset: every image is decoded, resized to a fixed 64x64 RGBA frame,
//! and the frames are serialized as nested numeric arrays in a single
//! JSON document.
//!
//! The pipeline is: enumerate ([`list_images`]) -> parallel decode +
//! resize ([`convert_directory`]) -> serialize ([`write_document`]).
#![forbid(unsafe_code)]

pub mod core;
pub mod decode;
pub mod error;
pub mod pipeline;
pub mod scan;
pub mod serialize;

pub use crate::core::{Frame, FrameSize, FrameStore, PipelineStats};
pub use crate::decode::decode_frame;
pub use crate::error::{FramegridError, FramegridResult};
pub use crate::pipeline::{PipelineOptions, convert_directory, process_files, worker_count};
pub use crate::scan::list_images;
pub use crate::serialize::{DEFAULT_OUTPUT_PATH, OutputDocument, write_document};
