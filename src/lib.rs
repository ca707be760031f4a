//! Keyframe animation engine and transform pipeline.
//!
//! `keystage` drives an interactive mesh-staging tool: models are positioned
//! live in a viewport, per-model keyframes are captured along a shared
//! timeline, and a render sequence interpolates model translation between
//! keyframes while each finished frame is exported as a numbered image.
//!
//! Rasterization, shading and mesh file parsing are external collaborators:
//! the host supplies triangle-soup geometry and a
//! [`RenderBackend`](stage::RenderBackend), and the [`Stage`](stage::Stage)
//! hands back a world pose per model per tick.

pub mod animation;
pub mod camera;
pub mod errors;
pub mod export;
pub mod geometry;
pub mod math;
pub mod model;
pub mod registry;
pub mod stage;
pub mod utils;

pub use animation::{AnimationClock, ExportMode, PlaybackMode, TranslationTrack};
pub use camera::OrbitCamera;
pub use errors::{KeystageError, Result};
pub use export::FrameExporter;
pub use geometry::{Geometry, GeometryHandle, GeometryStore, Triangle};
pub use model::{Model, Rgba};
pub use registry::{Command, ModelHandle, ModelRegistry};
pub use stage::{CapturedFrame, RenderBackend, Stage, TickReport};
pub use utils::time::TickPacer;
