// Audio player module components
mod audio_backend;
mod player_component;
mod player_controls;
mod player_state;

// Re-export the main components
pub use player_component::AudioPlayer;
pub use player_state::{AudioSource, PlaybackPhase, PlayerState, format_time};
