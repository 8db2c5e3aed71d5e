use crate::app::App;
use crate::mpris::MprisHandle;

/// Push the current track and playback state to the MPRIS service.
pub fn update_mpris(mpris: &MprisHandle, app: &App) {
    let index = app
        .playback_handle
        .as_ref()
        .and_then(|h| h.lock().ok().and_then(|info| info.index));
    let track = index.and_then(|i| app.tracks.get(i));
    mpris.set_track_metadata(index, track, app.current_album());
    mpris.set_playback(app.playback);
}
