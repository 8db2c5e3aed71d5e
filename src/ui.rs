//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, Pane, PlaybackState};
use crate::catalog::CoverRef;
use crate::config::{TimeField, UiSettings};
use crate::player::PlaybackInfo;

const CONTROLS: [(&str, &str); 9] = [
    ("tab", "switch pane"),
    ("j/k", "up/down"),
    ("enter", "open album / play track"),
    ("space/p", "play/pause"),
    ("h/l", "prev/next track"),
    ("←/→", "seek"),
    ("-/+", "volume"),
    ("m", "mute"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Build the position label (elapsed/total/remaining) per `UiSettings`.
fn time_text(elapsed: Duration, total: Option<Duration>, ui: &UiSettings) -> String {
    let mut parts: Vec<String> = Vec::new();
    for f in &ui.now_playing_time_fields {
        match f {
            TimeField::Elapsed => parts.push(format_mmss(elapsed)),
            TimeField::Total => {
                if let Some(t) = total {
                    parts.push(format_mmss(t));
                }
            }
            TimeField::Remaining => {
                if let Some(t) = total {
                    let rem = t.saturating_sub(elapsed);
                    parts.push(format!("-{}", format_mmss(rem)));
                }
            }
        }
    }

    if parts.is_empty() {
        format_mmss(elapsed)
    } else {
        parts.join(&ui.now_playing_time_separator)
    }
}

fn cover_label(cover: &CoverRef) -> String {
    match cover {
        CoverRef::File(p) => p
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("?")
            .to_string(),
        CoverRef::Url(u) => u.clone(),
        CoverRef::Placeholder => "-".to_string(),
    }
}

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block
    }
}

/// Render the entire UI into the provided `frame` using `app` state.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Snapshot the playback info once per frame.
    let info: Option<PlaybackInfo> = app
        .playback_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|i| i.clone()));

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" rondo ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        let state = match app.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        };
        parts.push(state.to_string());

        if let Some(track) = info
            .as_ref()
            .and_then(|i| i.index)
            .and_then(|i| app.tracks.get(i))
        {
            parts.push(format!("Track: {}", track.name));
        }

        if let Some(album) = app.current_album() {
            parts.push(format!("Album: {}", album.title));
            parts.push(format!("Art: {}", cover_label(&album.cover)));
        }

        if let Some(info) = info.as_ref() {
            if info.muted {
                parts.push("Vol: muted".to_string());
            } else {
                parts.push(format!("Vol: {:3.0}%", info.volume * 100.0));
            }
        }

        if let Some(root) = &app.library_root {
            parts.push(format!("Root: {root}"));
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Position gauge
    {
        let (elapsed, total) = match info.as_ref() {
            Some(i) => (
                i.elapsed,
                i.index.and_then(|idx| app.tracks.get(idx)).and_then(|t| t.duration),
            ),
            None => (Duration::ZERO, None),
        };
        let ratio = match total {
            Some(t) if !t.is_zero() => (elapsed.as_secs_f64() / t.as_secs_f64()).clamp(0.0, 1.0),
            _ => 0.0,
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" position "))
            .ratio(ratio)
            .label(time_text(elapsed, total, ui_settings));
        frame.render_widget(gauge, chunks[2]);
    }

    // Albums and tracks panes
    {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[3]);

        let album_items: Vec<ListItem> = app
            .albums
            .iter()
            .map(|a| {
                if a.description.is_empty() {
                    ListItem::new(a.title.clone())
                } else {
                    ListItem::new(format!("{} · {}", a.title, a.description))
                }
            })
            .collect();
        let albums = List::new(album_items)
            .block(pane_block(" albums ", app.focus == Pane::Albums))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut album_state = ratatui::widgets::ListState::default();
        if app.has_albums() {
            album_state.select(Some(app.selected_album));
        }
        frame.render_stateful_widget(albums, panes[0], &mut album_state);

        let track_items: Vec<ListItem> = app
            .tracks
            .iter()
            .map(|t| match t.duration {
                Some(d) => ListItem::new(format!("{} ({})", t.name, format_mmss(d))),
                None => ListItem::new(t.name.clone()),
            })
            .collect();
        let tracks = List::new(track_items)
            .block(pane_block(" tracks ", app.focus == Pane::Tracks))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut track_state = ratatui::widgets::ListState::default();
        if app.has_tracks() {
            track_state.select(Some(app.selected_track));
        }
        frame.render_stateful_widget(tracks, panes[1], &mut track_state);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
