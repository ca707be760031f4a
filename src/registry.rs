//! Model registry and the UI-facing command surface.
//!
//! The registry is the single owner of model lifetime, keyed by stable
//! [`ModelHandle`]s and decoupled from any presentation layer. UI widgets
//! dispatch [`Command`]s into the core instead of capturing models in
//! per-button closures.

use slotmap::{new_key_type, SlotMap};

use crate::errors::{KeystageError, Result};
use crate::model::{Model, Rgba};

new_key_type! {
    /// Stable identifier for a model in the registry.
    pub struct ModelHandle;
}

/// Commands the UI layer dispatches into the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    CaptureKeyframe { model: ModelHandle, frame: u32 },
    ToggleVisible { model: ModelHandle },
    SetColor { model: ModelHandle, color: Rgba },
}

/// Owns every [`Model`] for the lifetime of the process.
///
/// Models are never removed, so slot order is insertion order and draw order
/// stays deterministic.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: SlotMap<ModelHandle, Model>,
}

impl ModelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, model: Model) -> ModelHandle {
        self.models.insert(model)
    }

    pub fn get(&self, handle: ModelHandle) -> Result<&Model> {
        self.models.get(handle).ok_or(KeystageError::ModelNotFound)
    }

    pub fn get_mut(&mut self, handle: ModelHandle) -> Result<&mut Model> {
        self.models
            .get_mut(handle)
            .ok_or(KeystageError::ModelNotFound)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModelHandle, &Model)> {
        self.models.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ModelHandle, &mut Model)> {
        self.models.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Rewinds every model's keyframe cursor (positioning-mode entry).
    pub fn reset_cursors(&mut self) {
        for (_, model) in self.models.iter_mut() {
            model.reset_cursor();
        }
    }

    /// Dispatches a UI command against the addressed model.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::CaptureKeyframe { model, frame } => {
                self.get_mut(model)?.capture_keyframe(frame)
            }
            Command::ToggleVisible { model } => {
                self.get_mut(model)?.toggle_visible();
                Ok(())
            }
            Command::SetColor { model, color } => {
                self.get_mut(model)?.set_color(color);
                Ok(())
            }
        }
    }
}
