//! Headless demo: stage a triangle, capture two keyframes, export a short
//! image sequence into `target/demo_frames/`.
//!
//! The backend here is a minimal software rasterizer that clears to a dark
//! background and splats the projected triangle vertices, enough to see the
//! interpolated motion in the exported files. Real hosts plug in a GPU
//! renderer behind the same trait.

use glam::{Mat4, Vec3};

use keystage::{CapturedFrame, ExportMode, GeometryHandle, PlaybackMode, RenderBackend, Rgba, Stage};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

struct SoftwareBackend {
    view_projection: Mat4,
    // Bottom-up RGB, matching the capture convention.
    pixels: Vec<u8>,
}

impl SoftwareBackend {
    fn new() -> Self {
        Self {
            view_projection: Mat4::IDENTITY,
            pixels: vec![0; (WIDTH * HEIGHT * 3) as usize],
        }
    }

    fn splat(&mut self, clip: glam::Vec4, color: Rgba) {
        if clip.w <= 0.0 {
            return;
        }
        let ndc = clip.truncate() / clip.w;
        if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
            return;
        }
        let x = ((ndc.x + 1.0) * 0.5 * (WIDTH - 1) as f32) as u32;
        let y = ((ndc.y + 1.0) * 0.5 * (HEIGHT - 1) as f32) as u32;
        for dy in y.saturating_sub(2)..=(y + 2).min(HEIGHT - 1) {
            for dx in x.saturating_sub(2)..=(x + 2).min(WIDTH - 1) {
                let i = ((dy * WIDTH + dx) * 3) as usize;
                self.pixels[i] = (color.r * 255.0) as u8;
                self.pixels[i + 1] = (color.g * 255.0) as u8;
                self.pixels[i + 2] = (color.b * 255.0) as u8;
            }
        }
    }
}

impl RenderBackend for SoftwareBackend {
    fn surface_size(&self) -> (u32, u32) {
        (WIDTH, HEIGHT)
    }

    fn begin_frame(&mut self, view: Mat4, projection: Mat4) {
        self.view_projection = projection * view;
        for (i, byte) in self.pixels.iter_mut().enumerate() {
            *byte = if i % 3 == 2 { 40 } else { 25 };
        }
    }

    fn draw(&mut self, _geometry: GeometryHandle, pose: Mat4, color: Rgba) {
        let mvp = self.view_projection * pose;
        for vertex in [Vec3::ZERO, Vec3::X, Vec3::Y] {
            self.splat(mvp * vertex.extend(1.0), color);
        }
    }

    fn capture(&mut self) -> CapturedFrame {
        CapturedFrame {
            pixels: self.pixels.clone(),
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut stage = Stage::new("target/demo_frames")?;
    let mut backend = SoftwareBackend::new();

    // === 1. Stage a single triangle ===
    let model = stage.load_model(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![Vec3::Z])?;
    stage.set_color(model, Rgba::new(0.9, 0.4, 0.2, 1.0))?;

    // === 2. Capture a two-keyframe sweep ===
    stage.set_live_transform(model, ["-3", "0", "0"], ["0", "0", "0"])?;
    stage.capture_keyframe(model, 0)?;
    stage.set_live_transform(model, ["3", "2", "0"], ["0", "0", "45"])?;
    stage.capture_keyframe(model, 30)?;

    // === 3. Render and export the sequence ===
    stage.start_render_sequence(30, ExportMode::OneShot);
    while stage.clock().mode() == PlaybackMode::Rendering {
        stage.tick(&mut backend)?;
    }

    println!(
        "Exported 30 frames to {}",
        stage.exporter().output_dir().display()
    );
    Ok(())
}
