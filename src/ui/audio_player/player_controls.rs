use std::path::Path;
use std::sync::{Arc, Mutex};

use egui::{Button, Color32, CornerRadius, Frame, RichText, Ui, widgets::Slider};
use egui_phosphor::regular;

use super::player_state::{AudioSource, PlayerState, format_time};
use crate::ui::toast::Toasts;

/// Request playback start or pause, surfacing a failed play request as
/// exactly one error toast. The player stays non-playing on failure.
pub(crate) fn request_toggle_play(state: &mut PlayerState, toasts: &mut Toasts) {
    if let Err(e) = state.toggle_play() {
        log::error!("Play/pause error: {e}");
        toasts.error("Unable to play audio. Please try again.");
    }
}

/// Copy the bound source to `dest`, reporting the outcome as a toast
pub(crate) fn download_to(source: &AudioSource, dest: &Path, toasts: &mut Toasts) {
    match std::fs::copy(&source.locator, dest) {
        Ok(_) => {
            log::info!("Saved {} to {}", source.display_name, dest.display());
            toasts.success(format!("{} is being downloaded", source.display_name));
        }
        Err(e) => {
            log::error!("Download error for {}: {e}", source.locator);
            toasts.error("There was an error downloading the file");
        }
    }
}

/// Transport controls component
pub struct PlayerControls {
    /// Reference to the player state
    state: Arc<Mutex<PlayerState>>,
}

impl PlayerControls {
    /// Create a new controls component over shared player state
    pub fn new(state: Arc<Mutex<PlayerState>>) -> Self {
        Self { state }
    }

    /// Render the transport controls
    pub fn render(&mut self, ui: &mut Ui, toasts: &mut Toasts) {
        // Snapshot what the widgets need so the lock is not held while
        // rendering
        let (source, loading, playing, current_time, duration, duration_known, progress, volume) = {
            let state = self.state.lock().unwrap();

            if state.is_playing() {
                ui.ctx().request_repaint();
            }

            (
                state.source().cloned(),
                state.is_loading(),
                state.is_playing(),
                state.current_time(),
                state.duration(),
                state.duration_known(),
                state.progress_percent(),
                state.volume(),
            )
        };

        let controls_enabled = source.is_some() && !loading;

        Frame::new()
            .inner_margin(8.0)
            .fill(ui.visuals().window_fill)
            .corner_radius(CornerRadius::same(6))
            .show(ui, |ui| {
                // Title row
                ui.horizontal(|ui| {
                    if let Some(source) = &source {
                        ui.label(
                            RichText::new(&source.display_name)
                                .color(ui.visuals().strong_text_color())
                                .size(16.0),
                        );
                    } else {
                        ui.label(
                            RichText::new("No audio loaded").color(ui.visuals().weak_text_color()),
                        );
                    }

                    if loading {
                        ui.add(egui::Spinner::new());
                        ui.label(RichText::new("Loading audio...").weak());
                    }
                });

                ui.add_space(4.0);

                // Progress row: position, seek slider, duration
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format_time(current_time)).monospace().size(14.0));

                    let mut seek_percent = progress;
                    let slider_response = ui
                        .scope(|ui| {
                            ui.spacing_mut().slider_width = ui.available_width() - 60.0;
                            ui.add_enabled(
                                controls_enabled && duration_known,
                                Slider::new(&mut seek_percent, 0.0..=100.0)
                                    .show_value(false)
                                    .text(""),
                            )
                        })
                        .inner;

                    if slider_response.drag_stopped() {
                        let mut state = self.state.lock().unwrap();
                        state.seek_percent(seek_percent);
                    }

                    ui.label(RichText::new(format_time(duration)).monospace().size(14.0));
                });

                ui.add_space(4.0);

                // Transport row
                ui.horizontal(|ui| {
                    let skip_back = Button::new(RichText::new(regular::SKIP_BACK).size(20.0));
                    if ui
                        .add_enabled(controls_enabled, skip_back)
                        .on_hover_text("Skip backward 10 seconds")
                        .clicked()
                    {
                        let mut state = self.state.lock().unwrap();
                        state.skip_backward();
                    }

                    let (play_icon, play_color) = if playing {
                        (regular::PAUSE_CIRCLE, Color32::from_rgb(255, 200, 100))
                    } else {
                        (regular::PLAY_CIRCLE, Color32::from_rgb(100, 255, 150))
                    };
                    let play_button = Button::new(
                        RichText::new(play_icon).size(28.0).color(if controls_enabled {
                            play_color
                        } else {
                            Color32::from_gray(150)
                        }),
                    );
                    if ui
                        .add_enabled(controls_enabled, play_button)
                        .on_hover_text(if playing { "Pause" } else { "Play" })
                        .clicked()
                    {
                        let mut state = self.state.lock().unwrap();
                        request_toggle_play(&mut state, toasts);
                    }

                    let stop_button = Button::new(
                        RichText::new(regular::STOP_CIRCLE)
                            .size(28.0)
                            .color(if controls_enabled {
                                Color32::from_rgb(255, 100, 100)
                            } else {
                                Color32::from_gray(150)
                            }),
                    );
                    if ui
                        .add_enabled(controls_enabled, stop_button)
                        .on_hover_text("Stop")
                        .clicked()
                    {
                        let mut state = self.state.lock().unwrap();
                        state.stop();
                    }

                    let skip_forward = Button::new(RichText::new(regular::SKIP_FORWARD).size(20.0));
                    if ui
                        .add_enabled(controls_enabled && duration_known, skip_forward)
                        .on_hover_text("Skip forward 10 seconds")
                        .clicked()
                    {
                        let mut state = self.state.lock().unwrap();
                        state.skip_forward();
                    }

                    // Volume cluster on the right
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{}%", (volume * 100.0).round() as u32)).weak());

                        let mut volume_percent = volume * 100.0;
                        let slider_response = ui
                            .scope(|ui| {
                                ui.spacing_mut().slider_width = ui.available_width() * 0.3;
                                ui.add(
                                    Slider::new(&mut volume_percent, 0.0..=100.0)
                                        .show_value(false)
                                        .text(""),
                                )
                            })
                            .inner;

                        if slider_response.changed() {
                            let mut state = self.state.lock().unwrap();
                            state.set_volume(volume_percent / 100.0);
                        }

                        let volume_icon = if volume <= 0.0 {
                            regular::SPEAKER_NONE
                        } else if volume < 0.5 {
                            regular::SPEAKER_LOW
                        } else {
                            regular::SPEAKER_HIGH
                        };
                        ui.label(RichText::new(volume_icon).size(16.0));
                    });
                });

                ui.add_space(4.0);

                // Download row
                if let Some(source) = &source {
                    let download_button = Button::new(
                        RichText::new(format!(
                            "{} Download {}",
                            regular::DOWNLOAD_SIMPLE,
                            source.display_name
                        ))
                        .size(14.0),
                    );
                    if ui
                        .add_enabled(controls_enabled, download_button)
                        .clicked()
                    {
                        if let Some(dest) = rfd::FileDialog::new()
                            .set_file_name(&source.display_name)
                            .save_file()
                        {
                            download_to(source, &dest, toasts);
                        }
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::super::audio_backend::scripted::ScriptedBackend;
    use super::*;

    fn bound_state(backend: ScriptedBackend) -> PlayerState {
        let mut state = PlayerState::with_backend(Box::new(backend));
        state
            .bind(AudioSource {
                locator: "narration.mp3".to_string(),
                display_name: "narration.mp3".to_string(),
            })
            .unwrap();
        state
    }

    #[test]
    fn failed_play_produces_exactly_one_toast() {
        let mut state = bound_state(ScriptedBackend::failing_play(60.0));
        let mut toasts = Toasts::new();

        request_toggle_play(&mut state, &mut toasts);

        assert!(!state.is_playing());
        assert_eq!(toasts.messages().len(), 1);
        assert!(toasts.messages()[0].message.contains("Unable to play"));
    }

    #[test]
    fn successful_play_produces_no_toast() {
        let mut state = bound_state(ScriptedBackend::with_duration(60.0));
        let mut toasts = Toasts::new();

        request_toggle_play(&mut state, &mut toasts);

        assert!(state.is_playing());
        assert!(toasts.messages().is_empty());
    }

    #[test]
    fn download_copies_file_and_confirms() {
        let dir = std::env::temp_dir();
        let nonce = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let src = dir.join(format!("pdf_to_audio_dl_src_{nonce}.mp3"));
        let dest = dir.join(format!("pdf_to_audio_dl_dest_{nonce}.mp3"));
        std::fs::write(&src, b"audio-bytes").unwrap();

        let source = AudioSource {
            locator: src.to_string_lossy().to_string(),
            display_name: "narration.mp3".to_string(),
        };
        let mut toasts = Toasts::new();
        download_to(&source, &dest, &mut toasts);

        assert_eq!(std::fs::read(&dest).unwrap(), b"audio-bytes");
        assert_eq!(toasts.messages().len(), 1);
        assert!(toasts.messages()[0].message.contains("narration.mp3"));

        let _ = std::fs::remove_file(&src);
        let _ = std::fs::remove_file(&dest);
    }

    #[test]
    fn download_failure_produces_one_error_toast() {
        let source = AudioSource {
            locator: "/nonexistent/source.mp3".to_string(),
            display_name: "narration.mp3".to_string(),
        };
        let mut toasts = Toasts::new();
        download_to(&source, Path::new("/nonexistent/dest.mp3"), &mut toasts);

        assert_eq!(toasts.messages().len(), 1);
        assert!(toasts.messages()[0].message.contains("error downloading"));
    }
}
