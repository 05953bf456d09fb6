/// Audio playback backend trait
/// Defines the interface for platform-specific audio playback implementations
#[allow(dead_code)]
pub trait AudioBackend {
    /// Initialize the audio backend
    fn init(&mut self) -> Result<(), String>;

    /// Load an audio source and return its duration in seconds.
    /// Any previously playing sound is released first.
    fn load(&mut self, source: &str) -> Result<f32, String>;

    /// Start or resume playback of the loaded source
    fn play(&mut self) -> Result<(), String>;

    /// Pause audio playback
    fn pause(&mut self) -> Result<(), String>;

    /// Stop audio playback and release the playing sound
    fn stop(&mut self) -> Result<(), String>;

    /// Set the playback position in seconds
    fn seek(&mut self, position_secs: f32) -> Result<(), String>;

    /// Set the volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32) -> Result<(), String>;

    /// Get the current playback position in seconds
    fn position(&self) -> f32;

    /// Check if audio is currently playing
    fn is_playing(&self) -> bool;

    /// Check if the backend is available (properly initialized)
    fn is_available(&self) -> bool;
}
