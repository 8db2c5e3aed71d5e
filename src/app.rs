//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the loaded albums,
//! the active playlist, selection and playback state.

mod model;

pub use model::*;
