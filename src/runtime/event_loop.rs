use std::error::Error;
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::app::{App, Pane, PlaybackState};
use crate::catalog::load_playlist;
use crate::config::Settings;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{Player, PlayerCmd, PlayerEvent};
use crate::ui;

use super::mpris_sync::update_mpris;

pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    settings: &Settings,
    root: &Path,
    app: &mut App,
    player: &Player,
    mpris: &MprisHandle,
    control_tx: &Sender<ControlCmd>,
    control_rx: &Receiver<ControlCmd>,
    events: &Receiver<PlayerEvent>,
) -> Result<(), Box<dyn Error>>
where
    <B as Backend>::Error: 'static,
{
    let mut last_mpris_index: Option<usize> = None;
    let mut last_mpris_playback = app.playback;

    loop {
        // Apply player notifications before drawing.
        while let Ok(ev) = events.try_recv() {
            match ev {
                PlayerEvent::TrackChanged(Some(i)) => {
                    if i < app.tracks.len() {
                        app.selected_track = i;
                    }
                }
                PlayerEvent::TrackChanged(None) => {}
                PlayerEvent::PlayState { playing } => {
                    app.playback = if playing {
                        PlaybackState::Playing
                    } else {
                        PlaybackState::Paused
                    };
                }
                PlayerEvent::Ended => {
                    app.playback = PlaybackState::Paused;
                }
            }
        }

        // A cleared handle with no current track means fully stopped.
        let mut playback_index: Option<usize> = None;
        if let Some(handle) = app.playback_handle.as_ref()
            && let Ok(info) = handle.lock()
        {
            playback_index = info.index;
            if info.index.is_none() && !info.loaded {
                app.playback = PlaybackState::Stopped;
            }
        }

        if playback_index != last_mpris_index || app.playback != last_mpris_playback {
            update_mpris(mpris, app);
            last_mpris_index = playback_index;
            last_mpris_playback = app.playback;
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            match cmd {
                ControlCmd::Quit => return Ok(()),
                ControlCmd::PlayPause => play_pause(app, player),
                ControlCmd::Play => {
                    if app.playback != PlaybackState::Playing {
                        play_pause(app, player);
                    }
                }
                ControlCmd::Pause => {
                    if app.playback == PlaybackState::Playing {
                        let _ = player.send(PlayerCmd::TogglePause);
                    }
                }
                ControlCmd::Stop => {
                    let _ = player.send(PlayerCmd::Stop);
                }
                ControlCmd::Next => {
                    let _ = player.send(PlayerCmd::Next);
                }
                ControlCmd::Prev => {
                    let _ = player.send(PlayerCmd::Prev);
                }
            }
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => app.toggle_focus(),
                KeyCode::Char('j') | KeyCode::Down => app.select_next(),
                KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
                KeyCode::Enter => match app.focus {
                    Pane::Albums => open_album(app, player, settings, root),
                    Pane::Tracks => {
                        if app.has_tracks() {
                            let _ = player.send(PlayerCmd::Play {
                                index: app.selected_track,
                                start_paused: false,
                            });
                        }
                    }
                },
                KeyCode::Char(' ') | KeyCode::Char('p') => {
                    let _ = control_tx.send(ControlCmd::PlayPause);
                }
                KeyCode::Char('l') => {
                    let _ = control_tx.send(ControlCmd::Next);
                }
                KeyCode::Char('h') => {
                    let _ = control_tx.send(ControlCmd::Prev);
                }
                KeyCode::Right => seek_by(app, player, settings.controls.seek_step),
                KeyCode::Left => seek_by(app, player, -settings.controls.seek_step),
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    volume_by(app, player, settings.controls.volume_step);
                }
                KeyCode::Char('-') => volume_by(app, player, -settings.controls.volume_step),
                KeyCode::Char('m') => {
                    let _ = player.send(PlayerCmd::ToggleMute);
                }
                _ => {}
            }
        }
    }
}

fn snapshot(app: &App) -> (bool, Option<usize>) {
    app.playback_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|i| (i.loaded, i.index)))
        .unwrap_or((false, None))
}

/// The playbar toggle: pause or resume a loaded sink, reload the current
/// track after it ended, or start the selected one from scratch.
fn play_pause(app: &mut App, player: &Player) {
    let (loaded, index) = snapshot(app);
    if loaded {
        let _ = player.send(PlayerCmd::TogglePause);
    } else if let Some(i) = index {
        let _ = player.send(PlayerCmd::Play {
            index: i,
            start_paused: false,
        });
    } else if app.has_tracks() {
        let _ = player.send(PlayerCmd::Play {
            index: app.selected_track,
            start_paused: false,
        });
    }
}

fn open_album(app: &mut App, player: &Player, settings: &Settings, root: &Path) {
    let Some(album_id) = app.current_album().map(|a| a.id.clone()) else {
        return;
    };

    let tracks = load_playlist(root, &album_id, &settings.library.fallback_playlists);
    app.set_playlist(tracks.clone());
    let _ = player.send(PlayerCmd::SetPlaylist(tracks));

    if settings.playback.play_on_album_select && app.has_tracks() {
        let _ = player.send(PlayerCmd::Play {
            index: 0,
            start_paused: false,
        });
    }
    app.focus = Pane::Tracks;
}

fn seek_by(app: &App, player: &Player, delta: f32) {
    let Some(info) = app
        .playback_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|i| i.clone()))
    else {
        return;
    };
    let Some(index) = info.index else {
        return;
    };
    let Some(total) = app.tracks.get(index).and_then(|t| t.duration) else {
        return;
    };
    if total.is_zero() {
        return;
    }

    let current = (info.elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0);
    let _ = player.send(PlayerCmd::Seek((current + delta).clamp(0.0, 1.0)));
}

fn volume_by(app: &App, player: &Player, delta: f32) {
    let volume = app
        .playback_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|i| i.volume))
        .unwrap_or(1.0);
    let _ = player.send(PlayerCmd::SetVolume(volume + delta));
}
