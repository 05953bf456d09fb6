use std::sync::{Arc, Mutex};

use egui::{Context, Frame, Ui};

use super::player_controls::PlayerControls;
use super::player_state::{AudioSource, PlayerState};
use crate::ui::toast::Toasts;

/// Main audio player component
pub struct AudioPlayer {
    /// Player state shared with the controls
    state: Arc<Mutex<PlayerState>>,
    /// Transport controls component
    controls: PlayerControls,
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayer {
    /// Create a new audio player
    pub fn new() -> Self {
        let state = Arc::new(Mutex::new(PlayerState::new()));
        let controls = PlayerControls::new(Arc::clone(&state));

        Self { state, controls }
    }

    /// Bind the player to an audio source. A load failure is surfaced as
    /// one error toast and leaves the previous source detached.
    pub fn bind(&mut self, locator: String, display_name: String, toasts: &mut Toasts) {
        log::info!("Binding audio source: {display_name} ({locator})");

        let mut state = self.state.lock().unwrap();
        if let Err(e) = state.bind(AudioSource {
            locator,
            display_name,
        }) {
            log::error!("Audio error: {e}");
            toasts.error("There was an error loading the audio file");
        }
    }

    /// Show the audio player in a bottom panel when a source is bound
    pub fn show(&mut self, ctx: &Context, toasts: &mut Toasts) {
        {
            let mut state = self.state.lock().unwrap();
            state.update_from_backend();
            if state.source().is_none() {
                return;
            }
        }

        egui::TopBottomPanel::bottom("audio_player_panel")
            .resizable(false)
            .frame(egui::Frame::new().fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                self.render(ui, toasts);
            });
    }

    /// Render the audio player UI
    pub fn render(&mut self, ui: &mut Ui, toasts: &mut Toasts) {
        Frame::new()
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                self.controls.render(ui, toasts);
            });
    }
}
