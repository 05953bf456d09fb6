use super::audio_backend::{AudioBackend, PlatformAudioBackend};

/// How far the skip buttons move the playback position, in seconds
pub const SKIP_SECS: f32 = 10.0;

/// Playback phase of the bound audio source.
///
/// The duration is only trustworthy in Ready/Playing/Paused/Ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// No source bound
    Idle,
    /// Source bound, metadata not available yet
    Loading,
    /// Metadata known, not playing
    Ready,
    /// Audio is audible
    Playing,
    /// Paused mid-track
    Paused,
    /// Track ran to its end; position has been reset to 0
    Ended,
    /// The source failed to load
    Errored,
}

/// A bound audio source: where to stream from, and what to call it
#[derive(Debug, Clone)]
pub struct AudioSource {
    /// Opaque locator for the audio data (a filesystem path on native)
    pub locator: String,
    /// Name shown in the player and used for downloads
    pub display_name: String,
}

/// Audio player state
pub struct PlayerState {
    /// Currently bound source (if any)
    source: Option<AudioSource>,
    phase: PlaybackPhase,
    /// Current playback position in seconds
    current_time: f32,
    /// Total duration in seconds; 0 while unknown
    duration: f32,
    /// Current volume (0.0 - 1.0)
    volume: f32,
    /// Audio backend for playback
    backend: Option<Box<dyn AudioBackend>>,
}

impl std::fmt::Debug for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerState")
            .field("source", &self.source)
            .field("phase", &self.phase)
            .field("current_time", &self.current_time)
            .field("duration", &self.duration)
            .field("volume", &self.volume)
            .field("backend", &"<audio backend>")
            .finish()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        let mut state = Self::with_backend(Box::new(PlatformAudioBackend::new()));

        match state.init_backend() {
            Ok(()) => log::info!("Audio backend initialized successfully"),
            Err(e) => log::error!("Failed to initialize audio backend: {e}"),
        }

        state
    }
}

impl PlayerState {
    /// Create a new player state with the platform backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a player state over an explicit backend
    pub fn with_backend(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            source: None,
            phase: PlaybackPhase::Idle,
            current_time: 0.0,
            duration: 0.0,
            volume: 0.8,
            backend: Some(backend),
        }
    }

    fn init_backend(&mut self) -> Result<(), String> {
        let backend = self
            .backend
            .as_mut()
            .ok_or_else(|| "No audio backend".to_string())?;
        backend.init()
    }

    /// Bind a new audio source, tearing down the previous one.
    ///
    /// On success the duration is captured, the position is reset and the
    /// current volume is applied to the backend. On failure the player is
    /// left in `Errored` with no stale playback running.
    pub fn bind(&mut self, source: AudioSource) -> Result<(), String> {
        self.unbind();

        let locator = source.locator.clone();
        self.source = Some(source);
        self.phase = PlaybackPhase::Loading;

        let Some(backend) = self.backend.as_mut() else {
            self.phase = PlaybackPhase::Errored;
            return Err("Audio backend not available".to_string());
        };

        match backend.load(&locator) {
            Ok(duration) => {
                self.duration = duration;
                self.current_time = 0.0;
                self.phase = PlaybackPhase::Ready;
                if let Err(e) = backend.set_volume(self.volume) {
                    log::error!("Failed to apply volume to new audio: {e}");
                }
                Ok(())
            }
            Err(e) => {
                self.phase = PlaybackPhase::Errored;
                Err(e)
            }
        }
    }

    /// Detach from the current source, stopping any playback
    pub fn unbind(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            if let Err(e) = backend.stop() {
                // Expected when nothing was playing
                log::debug!("Stop during unbind: {e}");
            }
        }
        self.source = None;
        self.phase = PlaybackPhase::Idle;
        self.current_time = 0.0;
        self.duration = 0.0;
    }

    /// Play or pause the audio.
    ///
    /// Pausing always succeeds. A play request may fail; the player then
    /// stays non-playing and the error is returned for the caller to
    /// surface.
    pub fn toggle_play(&mut self) -> Result<(), String> {
        match self.phase {
            PlaybackPhase::Playing => {
                if let Some(backend) = self.backend.as_mut() {
                    self.current_time = backend.position();
                    if let Err(e) = backend.pause() {
                        log::error!("Failed to pause audio: {e}");
                    }
                }
                self.phase = PlaybackPhase::Paused;
                Ok(())
            }
            PlaybackPhase::Ready | PlaybackPhase::Paused | PlaybackPhase::Ended => {
                let backend = self
                    .backend
                    .as_mut()
                    .ok_or_else(|| "Audio backend not available".to_string())?;
                backend.play()?;
                self.phase = PlaybackPhase::Playing;
                Ok(())
            }
            // Nothing to toggle; the controls are disabled in these phases
            PlaybackPhase::Idle | PlaybackPhase::Loading | PlaybackPhase::Errored => Ok(()),
        }
    }

    /// Stop playback and reset the position to the beginning.
    /// Unconditional: there is no failure path.
    pub fn stop(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            if let Err(e) = backend.stop() {
                log::debug!("Stop called but no audio is currently playing: {e}");
            }
        }
        self.current_time = 0.0;
        if !matches!(
            self.phase,
            PlaybackPhase::Idle | PlaybackPhase::Loading | PlaybackPhase::Errored
        ) {
            self.phase = PlaybackPhase::Ready;
        }
    }

    /// Seek to a percentage of the track, 0-100.
    /// A no-op while the duration is unknown; never changes the phase.
    pub fn seek_percent(&mut self, percent: f32) {
        if !self.duration_known() {
            return;
        }
        let new_time = (percent.clamp(0.0, 100.0) / 100.0) * self.duration;
        self.set_position(new_time);
    }

    /// Skip backward, clamped so the position never goes negative
    pub fn skip_backward(&mut self) {
        let new_time = (self.current_time - SKIP_SECS).max(0.0);
        self.set_position(new_time);
    }

    /// Skip forward, clamped to the known duration.
    /// With an unknown duration the clamp target is undefined, so this is
    /// a no-op until metadata arrives.
    pub fn skip_forward(&mut self) {
        if !self.duration_known() {
            return;
        }
        let new_time = (self.current_time + SKIP_SECS).min(self.duration);
        self.set_position(new_time);
    }

    fn set_position(&mut self, position: f32) {
        let clamped = if self.duration_known() {
            position.clamp(0.0, self.duration)
        } else {
            position.max(0.0)
        };
        self.current_time = clamped;

        if let Some(backend) = self.backend.as_mut() {
            if let Err(e) = backend.seek(clamped) {
                log::error!("Failed to set audio position: {e}");
            }
        }
    }

    /// Set the volume (0.0 - 1.0) in both the view state and the backend
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);

        if let Some(backend) = self.backend.as_mut() {
            if let Err(e) = backend.set_volume(self.volume) {
                log::error!("Failed to set audio volume: {e}");
            }
        }
    }

    /// Pull position updates from the backend and detect end of track
    pub fn update_from_backend(&mut self) {
        if self.phase != PlaybackPhase::Playing {
            return;
        }

        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        self.current_time = backend.position().min(self.duration);

        let ended = self.duration > 0.0 && self.current_time >= self.duration - 0.1;
        if ended || !backend.is_playing() {
            if let Err(e) = backend.stop() {
                log::debug!("Stop at end of track: {e}");
            }
            self.current_time = 0.0;
            self.phase = PlaybackPhase::Ended;
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn source(&self) -> Option<&AudioSource> {
        self.source.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    pub fn is_loading(&self) -> bool {
        self.phase == PlaybackPhase::Loading
    }

    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn duration_known(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    /// Playback progress as a percentage (0.0 - 100.0) for the seek slider
    pub fn progress_percent(&self) -> f32 {
        if self.duration_known() {
            (self.current_time / self.duration) * 100.0
        } else {
            0.0
        }
    }
}

/// Format a time in seconds as `m:ss` with zero-padded seconds.
/// Non-finite or negative input renders as `0:00`.
pub fn format_time(time: f32) -> String {
    if !time.is_finite() || time < 0.0 {
        return "0:00".to_string();
    }
    let minutes = (time / 60.0).floor() as u32;
    let seconds = (time % 60.0).floor() as u32;
    format!("{minutes}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::super::audio_backend::scripted::ScriptedBackend;
    use super::*;

    fn bound_state(duration: f32) -> PlayerState {
        let mut state = PlayerState::with_backend(Box::new(ScriptedBackend::with_duration(
            duration,
        )));
        state
            .bind(AudioSource {
                locator: "narration.mp3".to_string(),
                display_name: "narration.mp3".to_string(),
            })
            .unwrap();
        state
    }

    #[test]
    fn format_time_fixtures() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3.0), "0:03");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(f32::NAN), "0:00");
        assert_eq!(format_time(f32::INFINITY), "0:00");
        assert_eq!(format_time(-1.0), "0:00");
    }

    #[test]
    fn bind_captures_duration_and_applies_volume() {
        let state = bound_state(120.0);
        assert_eq!(state.phase(), PlaybackPhase::Ready);
        assert_eq!(state.duration(), 120.0);
        assert_eq!(state.current_time(), 0.0);
        assert!(!state.is_playing());
        assert!(!state.is_loading());
    }

    #[test]
    fn bind_failure_enters_errored() {
        let mut backend = ScriptedBackend::with_duration(0.0);
        backend.fail_load = true;
        let mut state = PlayerState::with_backend(Box::new(backend));

        let result = state.bind(AudioSource {
            locator: "missing.mp3".to_string(),
            display_name: "missing.mp3".to_string(),
        });

        assert!(result.is_err());
        assert_eq!(state.phase(), PlaybackPhase::Errored);
        assert!(!state.is_playing());
    }

    #[test]
    fn seek_percent_maps_linearly() {
        for duration in [30.0_f32, 61.5, 600.0] {
            for position in [0.0_f32, 7.25, duration / 3.0, duration] {
                let mut state = bound_state(duration);
                state.seek_percent(100.0 * position / duration);
                assert!(
                    (state.current_time() - position).abs() < 1e-3,
                    "seek to {position}s of {duration}s landed at {}",
                    state.current_time()
                );
            }
        }
    }

    #[test]
    fn seek_is_noop_while_duration_unknown() {
        let mut state = PlayerState::with_backend(Box::new(ScriptedBackend::with_duration(0.0)));
        state.seek_percent(50.0);
        assert_eq!(state.current_time(), 0.0);
        assert_eq!(state.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn seek_does_not_change_phase() {
        let mut state = bound_state(100.0);
        state.toggle_play().unwrap();
        state.seek_percent(50.0);
        assert_eq!(state.phase(), PlaybackPhase::Playing);

        state.toggle_play().unwrap();
        state.seek_percent(25.0);
        assert_eq!(state.phase(), PlaybackPhase::Paused);
    }

    #[test]
    fn skip_backward_clamps_at_zero() {
        let mut state = bound_state(100.0);
        state.seek_percent(5.0); // 5s
        state.skip_backward();
        assert_eq!(state.current_time(), 0.0);
    }

    #[test]
    fn skip_forward_clamps_at_duration() {
        let mut state = bound_state(100.0);
        state.seek_percent(97.0); // D - 3
        state.skip_forward();
        assert_eq!(state.current_time(), 100.0);
    }

    #[test]
    fn skip_forward_is_noop_while_duration_unknown() {
        let mut state = PlayerState::with_backend(Box::new(ScriptedBackend::with_duration(0.0)));
        state.skip_forward();
        assert_eq!(state.current_time(), 0.0);
    }

    #[test]
    fn toggle_alternation_ends_playing() {
        let mut state = bound_state(100.0);
        state.toggle_play().unwrap();
        assert!(state.is_playing());
        state.toggle_play().unwrap();
        assert_eq!(state.phase(), PlaybackPhase::Paused);
        state.toggle_play().unwrap();
        assert!(state.is_playing());
    }

    #[test]
    fn failed_play_stays_non_playing() {
        let mut state =
            PlayerState::with_backend(Box::new(ScriptedBackend::failing_play(100.0)));
        state
            .bind(AudioSource {
                locator: "narration.mp3".to_string(),
                display_name: "narration.mp3".to_string(),
            })
            .unwrap();

        assert!(state.toggle_play().is_err());
        assert!(!state.is_playing());
        assert_eq!(state.phase(), PlaybackPhase::Ready);
    }

    #[test]
    fn stop_resets_position_unconditionally() {
        let mut state = bound_state(100.0);
        state.toggle_play().unwrap();
        state.seek_percent(50.0);
        state.stop();
        assert_eq!(state.current_time(), 0.0);
        assert_eq!(state.phase(), PlaybackPhase::Ready);

        // Stopping again is harmless
        state.stop();
        assert_eq!(state.phase(), PlaybackPhase::Ready);
    }

    #[test]
    fn end_of_track_resets_to_start() {
        let mut state = bound_state(10.0);
        state.toggle_play().unwrap();

        // Drive the scripted backend to the end of the track
        if let Some(backend) = state.backend.as_mut() {
            backend.seek(10.0).unwrap();
        }
        state.update_from_backend();

        assert_eq!(state.phase(), PlaybackPhase::Ended);
        assert!(!state.is_playing());
        assert_eq!(state.current_time(), 0.0);
    }

    #[test]
    fn volume_is_clamped_and_forwarded() {
        let mut state = bound_state(100.0);
        state.set_volume(1.5);
        assert_eq!(state.volume(), 1.0);
        state.set_volume(-0.5);
        assert_eq!(state.volume(), 0.0);
        state.set_volume(0.4);
        assert_eq!(state.volume(), 0.4);
    }

    #[test]
    fn rebind_replaces_previous_source() {
        let mut state = bound_state(100.0);
        state.toggle_play().unwrap();

        state
            .bind(AudioSource {
                locator: "second.mp3".to_string(),
                display_name: "second.mp3".to_string(),
            })
            .unwrap();

        assert_eq!(state.phase(), PlaybackPhase::Ready);
        assert_eq!(state.current_time(), 0.0);
        assert_eq!(state.source().unwrap().locator, "second.mp3");
    }
}
