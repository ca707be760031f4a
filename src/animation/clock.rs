//! Global program mode and frame counter.
//!
//! The clock is a two-state machine: POSITIONING (interactive, live
//! transforms) and RENDERING (batch, interpolated transforms, one exported
//! frame per tick). `current_frame` is only meaningful while rendering and
//! resets to 0 on every mode change.

/// Which transform source feeds the models each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Live UI values drive each model's pose.
    Positioning,
    /// Keyframe interpolation drives each model's pose; frames are exported.
    Rendering,
}

/// What happens when a render run reaches its configured frame count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// Return to positioning mode after one full pass.
    #[default]
    OneShot,
    /// Restart at frame 0 and keep rendering, for unattended repeated takes.
    Looping,
}

/// Default sequence length for a render run.
pub const DEFAULT_TOTAL_FRAMES: u32 = 100;

#[derive(Debug, Clone)]
pub struct AnimationClock {
    mode: PlaybackMode,
    current_frame: u32,
    total_frames: u32,
    export_mode: ExportMode,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    /// Creates a clock in positioning mode at frame 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: PlaybackMode::Positioning,
            current_frame: 0,
            total_frames: DEFAULT_TOTAL_FRAMES,
            export_mode: ExportMode::OneShot,
        }
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.mode == PlaybackMode::Rendering
    }

    /// Zero-based frame counter. Only meaningful while rendering.
    #[inline]
    #[must_use]
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    #[inline]
    #[must_use]
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    #[inline]
    #[must_use]
    pub fn export_mode(&self) -> ExportMode {
        self.export_mode
    }

    /// POSITIONING → RENDERING. Resets the frame counter to 0 and fixes the
    /// run's frame count and completion behavior.
    pub fn start_render_sequence(&mut self, total_frames: u32, export_mode: ExportMode) {
        self.mode = PlaybackMode::Rendering;
        self.current_frame = 0;
        self.total_frames = total_frames;
        self.export_mode = export_mode;
    }

    /// True once the frame counter has reached the configured total. The
    /// tick that observes this performs the completion transition and renders
    /// nothing.
    #[must_use]
    pub fn run_complete(&self) -> bool {
        self.current_frame >= self.total_frames
    }

    /// Advances past a rendered-and-captured frame.
    pub fn advance(&mut self) {
        self.current_frame += 1;
    }

    /// Completion transition once the run is complete: one-shot runs return
    /// to positioning, looping runs restart at frame 0 and keep rendering.
    pub fn complete_run(&mut self) {
        self.current_frame = 0;
        if self.export_mode == ExportMode::OneShot {
            self.mode = PlaybackMode::Positioning;
        }
    }

    /// Explicit RENDERING → POSITIONING transition, usable mid-run.
    pub fn cancel(&mut self) {
        self.mode = PlaybackMode::Positioning;
        self.current_frame = 0;
    }
}
