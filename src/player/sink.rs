//! Sink construction from `Track` values.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::catalog::Track;

/// Open, decode and prepare a paused `Sink` for `track`, positioned at
/// `start_at`. Failures are reported as strings; the audio thread logs
/// and drops them, it never unwinds.
pub(super) fn create_sink_at(
    handle: &OutputStream,
    track: &Track,
    start_at: Duration,
) -> Result<Sink, String> {
    let file = File::open(&track.path).map_err(|e| format!("open {:?}: {e}", track.path))?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| format!("decode {:?}: {e}", track.path))?
        // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
        .skip_duration(start_at);

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
