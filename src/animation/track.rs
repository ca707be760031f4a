//! Per-model keyframe track with a monotonic segment cursor.
//!
//! A track is an ordered list of `(frame, translation)` samples. Sampling
//! resolves the segment bounding a query frame and linearly interpolates
//! between its endpoints. The cursor only moves forward within a render pass;
//! it is reset whenever the program re-enters positioning mode, so repeated
//! render passes are reproducible as long as they start from frame 0.

use glam::Vec3;

use crate::errors::{KeystageError, Result};

/// A single captured sample on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub frame: u32,
    pub translation: Vec3,
}

/// The interpolation interval bounding a query frame.
///
/// `length_in_frames == 0` means the track is holding a single value (zero or
/// one keyframe, or the query is past the last keyframe); callers must treat
/// that as "hold at `end`" and never divide by the length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_frame: u32,
    pub start: Vec3,
    pub end: Vec3,
    pub length_in_frames: u32,
}

/// Ordered keyframe samples plus the current segment cursor.
#[derive(Debug, Clone, Default)]
pub struct TranslationTrack {
    keyframes: Vec<Keyframe>,
    cursor: usize,
}

impl TranslationTrack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a keyframe. Captures must arrive in strictly increasing frame
    /// order; a frame at or before the last accepted one is rejected and the
    /// track is left unchanged. Keyframes never shrink.
    pub fn capture(&mut self, frame: u32, translation: Vec3) -> Result<()> {
        if let Some(last) = self.keyframes.last() {
            if frame <= last.frame {
                return Err(KeystageError::OutOfOrderKeyframe {
                    frame,
                    last: last.frame,
                });
            }
        }
        self.keyframes.push(Keyframe { frame, translation });
        Ok(())
    }

    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Frame index of the last keyframe, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<u32> {
        self.keyframes.last().map(|k| k.frame)
    }

    /// Rewinds the segment cursor. Called on every positioning-mode entry.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Resolves the segment bounding `query_frame`, advancing the cursor
    /// monotonically. A segment that has been passed is never revisited until
    /// [`reset_cursor`](Self::reset_cursor).
    ///
    /// With fewer than two keyframes remaining ahead of the cursor, start and
    /// end collapse to the sole available sample (the origin if the track is
    /// empty), producing a zero-length hold segment.
    pub fn resolve_segment(&mut self, query_frame: u32) -> Segment {
        if self.keyframes.is_empty() {
            return Segment {
                start_frame: 0,
                start: Vec3::ZERO,
                end: Vec3::ZERO,
                length_in_frames: 0,
            };
        }

        while self.cursor + 1 < self.keyframes.len()
            && query_frame >= self.keyframes[self.cursor + 1].frame
        {
            self.cursor += 1;
        }

        let start = self.keyframes[self.cursor];
        let end = self.keyframes.get(self.cursor + 1).copied().unwrap_or(start);

        Segment {
            start_frame: start.frame,
            start: start.translation,
            end: end.translation,
            length_in_frames: end.frame - start.frame,
        }
    }

    /// Interpolated translation at `query_frame`.
    ///
    /// Linear interpolation across the resolved segment; once past a
    /// segment's nominal end the end value is held, never extrapolated. This
    /// matters when the clock's total frame count exceeds the last keyframe.
    pub fn sample(&mut self, query_frame: u32) -> Vec3 {
        let segment = self.resolve_segment(query_frame);
        if segment.length_in_frames == 0 {
            // Hold: zero-length segments must never reach the division below.
            return segment.end;
        }

        let percent = query_frame.saturating_sub(segment.start_frame) as f32
            / segment.length_in_frames as f32;
        if percent >= 1.0 {
            segment.end
        } else {
            segment.start.lerp(segment.end, percent)
        }
    }
}
