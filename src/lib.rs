//! Background composer core: configuration state machine, renderable
//! derivation, linear undo/redo history, and a persisted preset
//! repository.
//!
//! The canonical state is [`background::BackgroundConfig`]; a
//! [`session::Session`] owns one per editing session and orchestrates
//! mutation → history capture → re-derivation, plus preset round-trips
//! through a [`store::PresetStore`].

pub mod background;
pub mod cli;
pub mod history;
pub mod logging;
pub mod preset;
pub mod scene;
pub mod session;
pub mod store;
