use std::time::Instant;

use kira::{
    AudioManager,
    AudioManagerSettings,
    DefaultBackend,
    Tween,
    sound::FromFileError,
    sound::streaming::{StreamingSoundData, StreamingSoundHandle},
};

use super::trait_def::AudioBackend;

/// Native audio backend implementation using kira
pub struct NativeAudioBackend {
    /// Audio manager for playback
    manager: Option<AudioManager<DefaultBackend>>,
    /// Handle to the currently playing sound
    sound_handle: Option<StreamingSoundHandle<FromFileError>>,
    /// Path of the loaded audio source
    source: Option<String>,
    /// Current position in seconds
    current_position: f32,
    /// Start time of playback for position tracking
    playback_start_time: Option<Instant>,
    /// Position when playback started
    playback_start_position: f32,
    /// Audio duration in seconds
    duration: f32,
    /// Is currently playing
    is_playing: bool,
    /// Whether backend initialization succeeded
    initialized: bool,
    /// Current volume level (0.0 - 1.0)
    volume: f32,
}

impl NativeAudioBackend {
    /// Create a new native audio backend
    pub fn new() -> Self {
        Self {
            manager: None,
            sound_handle: None,
            source: None,
            current_position: 0.0,
            playback_start_time: None,
            playback_start_position: 0.0,
            duration: 0.0,
            is_playing: false,
            initialized: false,
            volume: 1.0,
        }
    }

    fn volume_to_decibels(volume: f32) -> f32 {
        let clamped = volume.clamp(0.0, 1.0);
        if clamped <= 0.0 {
            -80.0
        } else {
            20.0 * clamped.log10()
        }
    }

    /// Release the current sound handle, if any
    fn release_handle(&mut self) {
        if let Some(mut handle) = self.sound_handle.take() {
            handle.stop(Tween::default());
        }
        self.playback_start_time = None;
        self.is_playing = false;
    }
}

impl AudioBackend for NativeAudioBackend {
    fn init(&mut self) -> Result<(), String> {
        match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => {
                self.manager = Some(manager);
                self.initialized = true;
                Ok(())
            }
            Err(e) => {
                self.initialized = false;
                Err(format!("Failed to initialize audio manager: {e}"))
            }
        }
    }

    fn load(&mut self, source: &str) -> Result<f32, String> {
        if !self.initialized {
            return Err("Audio backend not initialized".to_string());
        }

        self.release_handle();

        // Open the file once up front so a bad source fails at load time
        // with the real decoder error, not on the first play request.
        let sound_data = StreamingSoundData::from_file(source)
            .map_err(|e| format!("Failed to load audio file: {e}"))?;

        self.duration = sound_data.duration().as_secs_f32();
        self.source = Some(source.to_string());
        self.current_position = 0.0;
        self.playback_start_position = 0.0;

        Ok(self.duration)
    }

    fn play(&mut self) -> Result<(), String> {
        if !self.initialized {
            return Err("Audio backend not initialized".to_string());
        }

        // Resume a paused sound if we still hold its handle
        if let Some(handle) = &mut self.sound_handle {
            let volume_db = Self::volume_to_decibels(self.volume);
            let _ = handle.set_volume(volume_db, Tween::default());
            handle.resume(Tween::default());

            self.playback_start_time = Some(Instant::now());
            self.playback_start_position = self.current_position;
            self.is_playing = true;
            return Ok(());
        }

        let source = self
            .source
            .clone()
            .ok_or_else(|| "No audio loaded".to_string())?;
        let manager = self
            .manager
            .as_mut()
            .ok_or_else(|| "Audio manager not available".to_string())?;

        let sound_data = StreamingSoundData::from_file(&source)
            .map_err(|e| format!("Failed to load audio file: {e}"))?;

        let mut handle = manager
            .play(sound_data)
            .map_err(|e| format!("Failed to start audio playback: {e}"))?;

        let volume_db = Self::volume_to_decibels(self.volume);
        let _ = handle.set_volume(volume_db, Tween::default());

        if self.current_position > 0.0 {
            handle.seek_to(f64::from(self.current_position));
        }

        self.playback_start_time = Some(Instant::now());
        self.playback_start_position = self.current_position;
        self.is_playing = true;
        self.sound_handle = Some(handle);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), String> {
        if let Some(handle) = &mut self.sound_handle {
            if self.is_playing {
                if let Some(start_time) = self.playback_start_time {
                    let elapsed = start_time.elapsed().as_secs_f32();
                    self.current_position =
                        (self.playback_start_position + elapsed).min(self.duration);
                }
            }

            handle.pause(Tween::default());
            self.is_playing = false;
            Ok(())
        } else {
            Err("No audio playing".to_string())
        }
    }

    fn stop(&mut self) -> Result<(), String> {
        if self.sound_handle.is_none() {
            self.current_position = 0.0;
            self.playback_start_position = 0.0;
            return Err("No audio playing".to_string());
        }

        self.current_position = 0.0;
        self.playback_start_position = 0.0;
        self.release_handle();
        Ok(())
    }

    fn seek(&mut self, position_secs: f32) -> Result<(), String> {
        if self.source.is_none() {
            return Err("No audio loaded".to_string());
        }

        let clamped_position = position_secs.clamp(0.0, self.duration);
        self.current_position = clamped_position;
        self.playback_start_position = clamped_position;

        if let Some(handle) = &mut self.sound_handle {
            handle.seek_to(f64::from(clamped_position));
            if self.is_playing {
                self.playback_start_time = Some(Instant::now());
            }
        }
        // Without a live handle the stored position is applied on the
        // next play request.
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> Result<(), String> {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(handle) = &mut self.sound_handle {
            let volume_db = Self::volume_to_decibels(self.volume);
            let _ = handle.set_volume(volume_db, Tween::default());
        }
        Ok(())
    }

    fn position(&self) -> f32 {
        if !self.is_playing {
            return self.current_position;
        }

        if let Some(start_time) = self.playback_start_time {
            let elapsed = start_time.elapsed().as_secs_f32();
            let position = self.playback_start_position + elapsed;
            position.min(self.duration)
        } else {
            self.current_position
        }
    }

    fn is_playing(&self) -> bool {
        if self.is_playing && self.duration > 0.0 {
            return self.position() < self.duration;
        }

        self.is_playing
    }

    fn is_available(&self) -> bool {
        self.initialized
    }
}

impl Default for NativeAudioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NativeAudioBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeAudioBackend")
            .field("source", &self.source)
            .field("duration", &self.duration)
            .field("initialized", &self.initialized)
            .field("volume", &self.volume)
            .field("manager", &self.manager.as_ref().map(|_| "<audio manager>"))
            .field(
                "sound_handle",
                &self.sound_handle.as_ref().map(|_| "<sound handle>"),
            )
            .finish()
    }
}
