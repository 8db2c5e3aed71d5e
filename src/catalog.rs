//! Album catalog: metadata loading, playlist resolution and album
//! discovery.
//!
//! A library is a resource root whose immediate subdirectories are album
//! folders. Each folder carries an `info.json` with display metadata and
//! an optional ordered track list; the audio files live next to it.

mod meta;
mod model;
mod playlist;
mod scan;

pub use meta::*;
pub use model::*;
pub use playlist::*;
pub use scan::*;

#[cfg(test)]
mod tests;
