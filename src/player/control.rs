use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::config::PlaybackSettings;

use super::thread::spawn_player_thread;
use super::types::{PlaybackHandle, PlaybackInfo, PlayerCmd, PlayerEvent};

/// Handle to the audio thread. Commands go in through [`Player::send`];
/// state comes back through the shared snapshot and the event receiver.
pub struct Player {
    tx: Sender<PlayerCmd>,
    playback: PlaybackHandle,
    events: Mutex<Option<Receiver<PlayerEvent>>>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Player {
    pub fn new(settings: PlaybackSettings) -> Self {
        let (tx, rx) = mpsc::channel::<PlayerCmd>();
        let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();
        let playback: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let join = spawn_player_thread(rx, playback.clone(), event_tx, settings);

        Self {
            tx,
            playback,
            events: Mutex::new(Some(event_rx)),
            join: Mutex::new(Some(join)),
        }
    }

    /// Shared snapshot of the playback state, for rendering.
    pub fn playback_handle(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    /// Take the notification receiver. There is exactly one observer;
    /// subsequent calls yield `None`.
    pub fn take_events(&self) -> Option<Receiver<PlayerEvent>> {
        self.events.lock().ok().and_then(|mut rx| rx.take())
    }

    pub fn send(&self, cmd: PlayerCmd) -> Result<(), mpsc::SendError<PlayerCmd>> {
        self.tx.send(cmd)
    }

    /// Ask the audio thread to stop and wait for it to finish.
    pub fn shutdown(&self) {
        let _ = self.tx.send(PlayerCmd::Quit);
        if let Ok(mut join) = self.join.lock() {
            if let Some(handle) = join.take() {
                let _ = handle.join();
            }
        }
    }
}
