use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::catalog::scan_albums;
use crate::mpris::ControlCmd;
use crate::player::Player;

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn Error>> {
    let settings = settings::load_settings();

    let root = env::args()
        .nth(1)
        .unwrap_or_else(|| settings.library.root.clone());
    let root = PathBuf::from(root);

    let albums = scan_albums(&root);
    let player = Player::new(settings.playback.clone());
    let events = player
        .take_events()
        .ok_or("player notifications already claimed")?;

    let mut app = App::new(albums);
    app.set_library_root(root.display().to_string());
    app.set_playback_handle(player.playback_handle());

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());

    startup::load_initial_album(&mut app, &player, &root, &settings);
    mpris_sync::update_mpris(&mpris, &app);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &root,
        &mut app,
        &player,
        &mpris,
        &control_tx,
        &control_rx,
        &events,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    player.shutdown();

    run_result
}
