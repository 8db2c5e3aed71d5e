//! Playback controller.
//!
//! A dedicated audio thread owns the single live sink and the playback
//! bookkeeping. The rest of the program sends it `PlayerCmd`s over an
//! mpsc channel and observes it through a shared `PlaybackHandle`
//! snapshot plus a `PlayerEvent` channel.

mod control;
mod sink;
mod thread;
mod transport;
mod types;

pub use control::*;
pub use transport::{clamp_volume, next_index, prev_index, seek_target, should_toggle};
pub use types::*;

#[cfg(test)]
mod tests;
