//! Session controller: owns the current configuration and orchestrates
//! mutation, history capture, re-derivation, and preset round-trips.

use tracing::{debug, info};

use crate::background::{BackgroundConfig, BackgroundKind, Mutation, Renderable};
use crate::history::History;
use crate::preset::Preset;
use crate::store::{PresetStore, StoreError};

/// Error type for session operations.
#[derive(Debug)]
pub enum SessionError {
    /// Preset name was empty or blank on save
    EmptyName,
    /// The repository failed
    Store(StoreError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "preset name must not be empty"),
            Self::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// One editing session over a background configuration.
///
/// All mutations, history operations, and derivation run synchronously on
/// the caller's thread and complete before the next operation is accepted,
/// so preset writes can never overlap. The session is an explicit value
/// owned by whoever composes the application; there are no ambient
/// globals.
pub struct Session<S: PresetStore> {
    store: S,
    config: BackgroundConfig,
    history: History,
    renderable: Renderable,
    presets: Vec<Preset>,
}

impl<S: PresetStore> Session<S> {
    /// Start a session with the documented default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, BackgroundConfig::default())
    }

    /// Start a session from an externally assembled configuration.
    pub fn with_config(store: S, config: BackgroundConfig) -> Self {
        let renderable = config.derive();
        Self {
            store,
            config,
            history: History::new(),
            renderable,
            presets: Vec::new(),
        }
    }

    /// Apply one field-level mutation.
    ///
    /// Snapshots the pre-mutation configuration, applies the change, then
    /// recomputes the renderable. Recomputation is an explicit step at the
    /// end of every mutation path, not a reactive side effect.
    pub fn apply(&mut self, mutation: Mutation) {
        debug!(?mutation, "applying mutation");
        self.history.record(self.config.clone());
        self.config.apply(&mutation);
        self.renderable = self.config.derive();
    }

    /// Fold an externally ingested image reference (e.g. a dropped file)
    /// into the configuration as a single mutation: one snapshot covers
    /// both the kind switch and the URL.
    pub fn set_image(&mut self, url: impl Into<String>) {
        self.history.record(self.config.clone());
        self.config.kind = BackgroundKind::Image;
        self.config.image_url = url.into();
        self.renderable = self.config.derive();
    }

    /// Step backward through history. Returns whether anything changed.
    ///
    /// The undo itself is never recorded, so it cannot become undoable
    /// into a loop. With empty history this is a safe no-op.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.config.clone()) {
            Some(previous) => {
                self.config = previous;
                self.renderable = self.config.derive();
                true
            }
            None => false,
        }
    }

    /// Step forward through history; symmetric with [`Session::undo`].
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.config.clone()) {
            Some(next) => {
                self.config = next;
                self.renderable = self.config.derive();
                true
            }
            None => false,
        }
    }

    /// Persist the current configuration under `name` and refresh the
    /// preset list.
    ///
    /// A blank name fails validation synchronously without touching any
    /// state.
    pub fn save_preset(&mut self, name: &str) -> Result<(), SessionError> {
        if name.trim().is_empty() {
            return Err(SessionError::EmptyName);
        }
        let preset = Preset::from_config(name, &self.config);
        self.store.upsert(&preset)?;
        info!(name = %name, "saved preset");
        self.refresh_presets()?;
        Ok(())
    }

    /// Delete the preset named `name` and refresh the list. Deleting an
    /// absent name succeeds.
    pub fn delete_preset(&mut self, name: &str) -> Result<(), SessionError> {
        self.store.delete(name)?;
        info!(name = %name, "deleted preset");
        self.refresh_presets()?;
        Ok(())
    }

    /// Reload the in-memory preset list from the store.
    ///
    /// On failure the list keeps its last-known-good value, so a transient
    /// store error does not blank the visible gallery.
    pub fn refresh_presets(&mut self) -> Result<(), SessionError> {
        let all = self.store.list_all()?;
        self.presets = all;
        Ok(())
    }

    /// Replace the current configuration with a preset's fields.
    ///
    /// Absent optional fields were default-filled when the record was
    /// loaded. Applying a preset does not record a history snapshot;
    /// callers that want it undoable go through the normal mutation path.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.config = preset.config.clone();
        self.renderable = self.config.derive();
    }

    /// Look up a preset in the in-memory list by name.
    pub fn find_preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    // Presentation boundary: current state and control affordances.

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn renderable(&self) -> &Renderable {
        &self.renderable
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
