use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{info, warn};

use crate::core::{Frame, FrameSize, FrameStore, PipelineStats};
use crate::decode::decode_frame;
use crate::error::{FramegridError, FramegridResult};
use crate::scan::list_images;

/// Worker count to fall back on when hardware detection fails.
const FALLBACK_WORKERS: usize = 4;

#[derive(Clone, Debug)]
pub struct PipelineOptions {
    pub size: FrameSize,
    /// Image extension to enumerate, compared case-insensitively.
    pub extension: String,
    /// Worker pool size; `None` means detected hardware parallelism.
    pub workers: Option<usize>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            size: FrameSize::DEFAULT,
            extension: "png".to_string(),
            workers: None,
        }
    }
}

pub fn worker_count(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if n > 0 => n,
        _ => std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(FALLBACK_WORKERS),
    }
}

/// Run the whole pipeline over one directory: enumerate, decode + resize in
/// parallel, assemble the store in enumeration order.
///
/// Enumeration failure is downgraded to a warning and treated as an empty
/// listing; an empty listing is the only fatal condition here. Per-file
/// decode failures are logged and leave their slot as an all-zero frame.
pub fn convert_directory(
    dir: &Path,
    opts: &PipelineOptions,
) -> FramegridResult<(FrameStore, PipelineStats)> {
    let files = match list_images(dir, &opts.extension) {
        Ok(files) => files,
        Err(e) => {
            warn!("enumeration of '{}' failed: {e}", dir.display());
            Vec::new()
        }
    };

    if files.is_empty() {
        return Err(FramegridError::enumeration(format!(
            "no .{} files found in '{}'",
            opts.extension.trim_start_matches('.'),
            dir.display()
        )));
    }

    process_files(&files, opts)
}

/// Decode + resize an already-ordered file list with a fixed pull-model
/// worker pool.
///
/// One shared atomic cursor hands out indices; a worker that draws an index
/// past the end terminates. Each claimed index maps to exactly one slot, so
/// slot writes need no lock. The scope join is the only barrier between
/// processing and assembly.
pub fn process_files(
    files: &[PathBuf],
    opts: &PipelineOptions,
) -> FramegridResult<(FrameStore, PipelineStats)> {
    let size = opts.size;
    let slots: Vec<OnceLock<Frame>> = (0..files.len()).map(|_| OnceLock::new()).collect();
    let cursor = AtomicUsize::new(0);
    let workers = worker_count(opts.workers).min(files.len().max(1));

    info!(
        "processing {} files with {} workers ({}x{}x{})",
        files.len(),
        workers,
        size.width,
        size.height,
        size.channels
    );

    std::thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| {
                loop {
                    let idx = cursor.fetch_add(1, Ordering::Relaxed);
                    if idx >= files.len() {
                        break;
                    }
                    match decode_frame(&files[idx], size) {
                        // set cannot fail: the cursor hands out each index once
                        Ok(frame) => {
                            let _ = slots[idx].set(frame);
                        }
                        Err(e) => warn!("skipping '{}': {e}", files[idx].display()),
                    }
                }
            });
        }
    });

    let mut stats = PipelineStats {
        frames_total: files.len() as u64,
        ..PipelineStats::default()
    };

    let frames: Vec<Frame> = slots
        .into_iter()
        .map(|slot| match slot.into_inner() {
            Some(frame) => {
                stats.frames_decoded += 1;
                frame
            }
            None => {
                stats.frames_failed += 1;
                Frame::unpopulated(size)
            }
        })
        .collect();

    info!(
        "decoded {}/{} frames ({} failed)",
        stats.frames_decoded, stats.frames_total, stats.frames_failed
    );

    let store = FrameStore::new(size, frames)?;
    Ok((store, stats))
}
