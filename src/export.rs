//! Frame exporter: persists captured color buffers as numbered image files.
//!
//! Captured buffers arrive bottom-up (the source rendering convention), so
//! rows are flipped before encoding and the files read top-down. Export
//! failures are surfaced to the caller instead of being swallowed; the stage
//! logs them and the render sequence advances past the dropped frame.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::errors::{KeystageError, Result};

/// Writes `<output_dir>/<frame_index>.png`, one file per exported frame.
#[derive(Debug, Clone)]
pub struct FrameExporter {
    output_dir: PathBuf,
}

impl FrameExporter {
    /// Creates the output directory if it does not exist yet.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a given frame index is (or would be) written to.
    #[must_use]
    pub fn frame_path(&self, frame_index: u32) -> PathBuf {
        self.output_dir.join(format!("{frame_index}.png"))
    }

    /// Encodes and writes one frame.
    ///
    /// `pixels` must be a tightly packed RGB byte buffer of exactly
    /// `width * height * 3` bytes in bottom-up row order. The rows are
    /// flipped so the written image reads top-down.
    pub fn export_frame(
        &self,
        frame_index: u32,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<PathBuf> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(KeystageError::FrameExportFailed {
                frame: frame_index,
                reason: format!(
                    "expected {expected} bytes for {width}x{height} RGB, got {}",
                    pixels.len()
                ),
            });
        }

        let row_bytes = width as usize * 3;
        let mut flipped = Vec::with_capacity(expected);
        for row in pixels.chunks_exact(row_bytes).rev() {
            flipped.extend_from_slice(row);
        }

        let image =
            RgbImage::from_raw(width, height, flipped).ok_or(KeystageError::FrameExportFailed {
                frame: frame_index,
                reason: format!("buffer does not form a {width}x{height} RGB image"),
            })?;

        let path = self.frame_path(frame_index);
        image
            .save(&path)
            .map_err(|e| KeystageError::FrameExportFailed {
                frame: frame_index,
                reason: e.to_string(),
            })?;

        Ok(path)
    }
}
