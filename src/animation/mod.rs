//! Keyframe tracks and the render-mode clock.

pub mod clock;
pub mod track;

pub use clock::{AnimationClock, ExportMode, PlaybackMode, DEFAULT_TOTAL_FRAMES};
pub use track::{Keyframe, Segment, TranslationTrack};
