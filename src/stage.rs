//! Stage: the control surface the UI layer drives, and the tick loop that
//! feeds poses to the external renderer.
//!
//! The stage owns the model registry, the animation clock, the orbit camera,
//! the geometry store and the frame exporter. A host invokes [`Stage::tick`]
//! from a single fixed-rate timer callback; all shared state is touched only
//! from that callback, so no locking exists anywhere. The renderer call and
//! frame capture are synchronous and block the tick until complete.
//!
//! Data flow per tick:
//!
//! ```text
//! UI fields ──(positioning)──► live transform ─┐
//! keyframes ──(rendering)───► interpolation  ──┼─► compose pose ─► backend.draw
//!                                              │
//!                       (rendering) backend.capture ─► FrameExporter ─► <n>.png
//! ```

use glam::Mat4;

use crate::animation::{AnimationClock, ExportMode, PlaybackMode};
use crate::camera::OrbitCamera;
use crate::errors::Result;
use crate::export::FrameExporter;
use crate::geometry::{Geometry, GeometryHandle, GeometryStore};
use crate::model::{Model, Rgba};
use crate::registry::{Command, ModelHandle, ModelRegistry};

/// A finished frame read back from the renderer.
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    /// Tightly packed RGB bytes, `width * height * 3`, bottom-up row order.
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// The external renderer collaborator.
///
/// The stage never rasterizes anything itself; it hands the backend a view
/// and projection at the start of each tick, one `(geometry, pose, color)`
/// triple per visible model, and (in rendering mode only) asks for the
/// finished color buffer back.
pub trait RenderBackend {
    /// Current drawable size in pixels; feeds the projection aspect ratio.
    fn surface_size(&self) -> (u32, u32);

    fn begin_frame(&mut self, view: Mat4, projection: Mat4);

    fn draw(&mut self, geometry: GeometryHandle, pose: Mat4, color: Rgba);

    /// Reads back the finished frame. Only called in rendering mode.
    fn capture(&mut self) -> CapturedFrame;
}

/// What a single tick did, for hosts driving frame sliders and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Mode after the tick completed.
    pub mode: PlaybackMode,
    /// The frame that was rendered and exported this tick, if any.
    pub rendered_frame: Option<u32>,
    /// How many models were drawn.
    pub draw_count: usize,
}

/// Owner of all engine state and the single mutation point.
pub struct Stage {
    registry: ModelRegistry,
    clock: AnimationClock,
    camera: OrbitCamera,
    geometries: GeometryStore,
    exporter: FrameExporter,
}

impl Stage {
    /// Creates a stage exporting frames into `output_dir` (created if
    /// missing).
    pub fn new(output_dir: impl Into<std::path::PathBuf>) -> Result<Self> {
        Ok(Self {
            registry: ModelRegistry::new(),
            clock: AnimationClock::new(),
            camera: OrbitCamera::default(),
            geometries: GeometryStore::new(),
            exporter: FrameExporter::new(output_dir)?,
        })
    }

    #[must_use]
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ModelRegistry {
        &mut self.registry
    }

    #[must_use]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    #[must_use]
    pub fn geometries(&self) -> &GeometryStore {
        &self.geometries
    }

    #[must_use]
    pub fn exporter(&self) -> &FrameExporter {
        &self.exporter
    }

    // ========================================================================
    // Control surface
    // ========================================================================

    /// Validates the supplied triangle soup, stores it, and stages a new
    /// model referencing it. A failed validation aborts only this load;
    /// existing models are untouched.
    pub fn load_model(
        &mut self,
        positions: Vec<glam::Vec3>,
        normals: Vec<glam::Vec3>,
    ) -> Result<ModelHandle> {
        let geometry = Geometry::from_triangle_soup(positions, normals)?;
        let handle = self.geometries.insert(geometry);
        Ok(self.registry.add(Model::new(handle)))
    }

    /// Applies raw UI transform fields to a model. Each vector is atomic:
    /// a malformed translation field leaves the translation untouched, a
    /// malformed rotation field leaves the rotation untouched.
    pub fn set_live_transform(
        &mut self,
        model: ModelHandle,
        translation: [&str; 3],
        rotation: [&str; 3],
    ) -> Result<()> {
        let model = self.registry.get_mut(model)?;
        let translation_result =
            model.set_live_translation_fields(translation[0], translation[1], translation[2]);
        let rotation_result =
            model.set_live_rotation_fields(rotation[0], rotation[1], rotation[2]);
        translation_result.and(rotation_result)
    }

    pub fn set_visible(&mut self, model: ModelHandle, visible: bool) -> Result<()> {
        self.registry.get_mut(model)?.set_visible(visible);
        Ok(())
    }

    pub fn set_color(&mut self, model: ModelHandle, color: Rgba) -> Result<()> {
        self.registry.get_mut(model)?.set_color(color);
        Ok(())
    }

    /// Captures `(frame, current live translation)` on the model's track.
    pub fn capture_keyframe(&mut self, model: ModelHandle, frame: u32) -> Result<()> {
        self.registry.get_mut(model)?.capture_keyframe(frame)
    }

    /// Dispatches a UI [`Command`] into the core.
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        self.registry.apply(command)
    }

    /// POSITIONING → RENDERING: begins a render run of `total_frames`
    /// frames, starting at frame 0.
    pub fn start_render_sequence(&mut self, total_frames: u32, export_mode: ExportMode) {
        self.clock.start_render_sequence(total_frames, export_mode);
        log::info!("Starting render sequence: {total_frames} frames ({export_mode:?})");
    }

    /// Explicitly aborts a render run and returns to positioning mode.
    pub fn cancel_render(&mut self) {
        if self.clock.is_rendering() {
            log::info!(
                "Render sequence cancelled at frame {}",
                self.clock.current_frame()
            );
        }
        self.clock.cancel();
        self.registry.reset_cursors();
    }

    // ========================================================================
    // Tick
    // ========================================================================

    /// One advance-and-render step, invoked from the host's fixed-rate timer.
    ///
    /// In positioning mode every visible model is drawn with its live pose.
    /// In rendering mode every visible model is drawn with its interpolated
    /// pose at the current frame, the finished buffer is captured and
    /// exported, and the frame counter advances. When the counter has reached
    /// the configured total the tick performs the completion transition
    /// instead: nothing is drawn or captured, one-shot runs return to
    /// positioning, looping runs restart at frame 0.
    ///
    /// A failed export is logged and returned as an error, but the counter
    /// has already advanced, so a dropped frame never stalls the sequence.
    pub fn tick(&mut self, backend: &mut dyn RenderBackend) -> Result<TickReport> {
        let (width, height) = backend.surface_size();
        let aspect = if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
        let view = self.camera.view_matrix();
        let projection = self.camera.projection(aspect);

        match self.clock.mode() {
            PlaybackMode::Positioning => {
                backend.begin_frame(view, projection);
                let mut draw_count = 0;
                for (_, model) in self.registry.iter() {
                    if !model.visible() {
                        continue;
                    }
                    backend.draw(model.geometry(), model.live_pose(), model.color());
                    draw_count += 1;
                }
                Ok(TickReport {
                    mode: PlaybackMode::Positioning,
                    rendered_frame: None,
                    draw_count,
                })
            }
            PlaybackMode::Rendering => {
                if self.clock.run_complete() {
                    // Completion transition tick: no draw, no capture.
                    self.clock.complete_run();
                    self.registry.reset_cursors();
                    return Ok(TickReport {
                        mode: self.clock.mode(),
                        rendered_frame: None,
                        draw_count: 0,
                    });
                }

                let frame = self.clock.current_frame();
                backend.begin_frame(view, projection);
                let mut draw_count = 0;
                for (_, model) in self.registry.iter_mut() {
                    if !model.visible() {
                        continue;
                    }
                    let pose = model.pose_at(frame);
                    backend.draw(model.geometry(), pose, model.color());
                    draw_count += 1;
                }

                let captured = backend.capture();
                let export = self.exporter.export_frame(
                    frame,
                    &captured.pixels,
                    captured.width,
                    captured.height,
                );
                self.clock.advance();

                match export {
                    Ok(path) => {
                        log::info!(
                            "Rendered frame {frame}/{} -> {}",
                            self.clock.total_frames(),
                            path.display()
                        );
                        Ok(TickReport {
                            mode: PlaybackMode::Rendering,
                            rendered_frame: Some(frame),
                            draw_count,
                        })
                    }
                    Err(err) => {
                        log::error!("Dropped frame {frame}: {err}");
                        Err(err)
                    }
                }
            }
        }
    }
}
