use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::warn;
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::catalog::Track;
use crate::config::PlaybackSettings;

use super::sink::create_sink_at;
use super::transport::{clamp_volume, next_index, prev_index, seek_target, should_toggle};
use super::types::{PlaybackHandle, PlayerCmd, PlayerEvent};

/// Mutable state owned by the audio thread: the single live sink plus
/// the bookkeeping mirrored into the shared `PlaybackHandle`.
struct Session {
    playlist: Vec<Track>,
    sink: Option<Sink>,
    index: Option<usize>,
    paused: bool,

    // Track start time and accumulated elapsed when paused.
    started_at: Option<Instant>,
    accumulated: Duration,

    volume: f32,
    muted: bool,

    info: PlaybackHandle,
    events: Sender<PlayerEvent>,
}

impl Session {
    fn new(info: PlaybackHandle, events: Sender<PlayerEvent>, settings: &PlaybackSettings) -> Self {
        let volume = clamp_volume(settings.volume);
        if let Ok(mut i) = info.lock() {
            i.volume = volume;
        }
        Self {
            playlist: Vec::new(),
            sink: None,
            index: None,
            paused: true,
            started_at: None,
            accumulated: Duration::ZERO,
            volume,
            muted: false,
            info,
            events,
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    fn emit(&self, ev: PlayerEvent) {
        let _ = self.events.send(ev);
    }

    /// Stop-before-replace: discard any previous sink, then load the
    /// track at `index` from position zero and start it (unless asked to
    /// stay paused). Same index with a live sink toggles instead.
    fn play(&mut self, stream: &OutputStream, index: usize, start_paused: bool) {
        if should_toggle(self.index, index, self.sink.is_some()) {
            self.toggle_pause();
            return;
        }

        let Some(track) = self.playlist.get(index) else {
            return;
        };

        if let Some(s) = self.sink.as_ref() {
            s.stop();
        }
        self.sink = None;

        let new_sink = match create_sink_at(stream, track, Duration::ZERO) {
            Ok(s) => s,
            Err(e) => {
                // A listed track without a playable file: log and stay stopped.
                warn!("cannot load track: {e}");
                self.stop();
                return;
            }
        };
        new_sink.set_volume(self.effective_volume());
        if !start_paused {
            new_sink.play();
        }

        self.sink = Some(new_sink);
        self.index = Some(index);
        self.paused = start_paused;
        self.started_at = if start_paused {
            None
        } else {
            Some(Instant::now())
        };
        self.accumulated = Duration::ZERO;

        if let Ok(mut info) = self.info.lock() {
            info.index = Some(index);
            info.elapsed = Duration::ZERO;
            info.playing = !start_paused;
            info.loaded = true;
        }
        self.emit(PlayerEvent::TrackChanged(Some(index)));
        self.emit(PlayerEvent::PlayState {
            playing: !start_paused,
        });
    }

    fn toggle_pause(&mut self) {
        let Some(s) = self.sink.as_ref() else {
            return;
        };
        if self.paused {
            s.play();
            self.started_at = Some(Instant::now());
        } else {
            s.pause();
            if let Some(st) = self.started_at.take() {
                self.accumulated += st.elapsed();
            }
        }
        self.paused = !self.paused;
        if let Ok(mut info) = self.info.lock() {
            info.playing = !self.paused;
            if self.paused {
                // The ticker only advances in 500ms steps; snap to the
                // precise position while paused.
                info.elapsed = self.accumulated;
            }
        }
        self.emit(PlayerEvent::PlayState {
            playing: !self.paused,
        });
    }

    /// Full stop: discard the sink and forget the current track.
    fn stop(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.stop();
        }
        self.sink = None;
        self.index = None;
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        if let Ok(mut info) = self.info.lock() {
            info.index = None;
            info.elapsed = Duration::ZERO;
            info.playing = false;
            info.loaded = false;
        }
        self.emit(PlayerEvent::TrackChanged(None));
        self.emit(PlayerEvent::PlayState { playing: false });
    }

    /// Natural end of track: position back to zero, state paused, sink
    /// discarded, current track kept. Playback never advances on its own;
    /// the user presses next.
    fn end_of_track(&mut self) {
        self.sink = None;
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        if let Ok(mut info) = self.info.lock() {
            info.finish_track();
        }
        self.emit(PlayerEvent::Ended);
        self.emit(PlayerEvent::PlayState { playing: false });
    }

    /// Scrubbing: rebuild the current sink and skip into the file.
    fn seek(&mut self, stream: &OutputStream, fraction: f32) {
        let Some(i) = self.index else {
            return;
        };
        if self.sink.is_none() {
            return;
        }
        // Unknown duration means metadata probing failed; silently ignore.
        let Some(duration) = self.playlist.get(i).and_then(|t| t.duration) else {
            return;
        };

        let target = seek_target(fraction, duration);

        if let Some(s) = self.sink.as_ref() {
            s.stop();
        }
        let track = &self.playlist[i];
        let new_sink = match create_sink_at(stream, track, target) {
            Ok(s) => s,
            Err(e) => {
                warn!("cannot seek: {e}");
                self.stop();
                return;
            }
        };
        new_sink.set_volume(self.effective_volume());
        if self.paused {
            self.started_at = None;
        } else {
            new_sink.play();
            self.started_at = Some(Instant::now());
        }

        self.sink = Some(new_sink);
        self.accumulated = target;
        if let Ok(mut info) = self.info.lock() {
            info.elapsed = target;
        }
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = clamp_volume(level);
        self.muted = false;
        self.apply_volume();
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.apply_volume();
    }

    fn apply_volume(&self) {
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(self.effective_volume());
        }
        if let Ok(mut info) = self.info.lock() {
            info.volume = self.volume;
            info.muted = self.muted;
        }
    }

    /// Replacing the playlist invalidates the current index; stop first
    /// so the current track always belongs to the current playlist.
    fn set_playlist(&mut self, tracks: Vec<Track>) {
        self.stop();
        self.playlist = tracks;
    }
}

pub(super) fn spawn_player_thread(
    rx: Receiver<PlayerCmd>,
    info: PlaybackHandle,
    events: Sender<PlayerEvent>,
    settings: PlaybackSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let mut session = Session::new(info.clone(), events, &settings);

        // Spawn a ticker thread to update the shared elapsed counter
        // periodically while playing.
        let info_for_ticker = info.clone();
        thread::spawn(move || {
            loop {
                thread::sleep(Duration::from_millis(500));
                let mut info = info_for_ticker.lock().unwrap();
                if info.playing {
                    info.elapsed = info.elapsed + Duration::from_millis(500);
                }
            }
        });

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    PlayerCmd::SetPlaylist(tracks) => session.set_playlist(tracks),
                    PlayerCmd::Play {
                        index,
                        start_paused,
                    } => session.play(&stream, index, start_paused),
                    PlayerCmd::TogglePause => session.toggle_pause(),
                    PlayerCmd::Stop => session.stop(),
                    PlayerCmd::Seek(fraction) => session.seek(&stream, fraction),
                    PlayerCmd::SetVolume(level) => session.set_volume(level),
                    PlayerCmd::ToggleMute => session.toggle_mute(),
                    PlayerCmd::Next => {
                        if let Some(i) = next_index(session.index, session.playlist.len()) {
                            session.play(&stream, i, false);
                        }
                    }
                    PlayerCmd::Prev => {
                        if let Some(i) = prev_index(session.index, session.playlist.len()) {
                            session.play(&stream, i, false);
                        }
                    }
                    PlayerCmd::Quit => {
                        if let Some(s) = session.sink.as_ref() {
                            s.stop();
                        }
                        // Update shared state so the UI doesn't keep showing Playing.
                        if let Ok(mut info) = session.info.lock() {
                            info.playing = false;
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // Periodic check for a drained sink.
                    if !session.paused && session.sink.as_ref().is_some_and(|s| s.empty()) {
                        session.end_of_track();
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
