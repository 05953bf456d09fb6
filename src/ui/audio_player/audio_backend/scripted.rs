use super::trait_def::AudioBackend;

/// In-memory backend with scriptable outcomes, for state machine tests
pub struct ScriptedBackend {
    pub duration: f32,
    pub position: f32,
    pub volume: f32,
    pub playing: bool,
    pub fail_load: bool,
    pub fail_play: bool,
    pub play_calls: usize,
    pub seek_calls: usize,
}

impl ScriptedBackend {
    pub fn with_duration(duration: f32) -> Self {
        Self {
            duration,
            position: 0.0,
            volume: 1.0,
            playing: false,
            fail_load: false,
            fail_play: false,
            play_calls: 0,
            seek_calls: 0,
        }
    }

    pub fn failing_play(duration: f32) -> Self {
        Self {
            fail_play: true,
            ..Self::with_duration(duration)
        }
    }
}

impl AudioBackend for ScriptedBackend {
    fn init(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn load(&mut self, _source: &str) -> Result<f32, String> {
        if self.fail_load {
            return Err("scripted load failure".to_string());
        }
        self.position = 0.0;
        self.playing = false;
        Ok(self.duration)
    }

    fn play(&mut self) -> Result<(), String> {
        self.play_calls += 1;
        if self.fail_play {
            return Err("scripted play failure".to_string());
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), String> {
        self.playing = false;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), String> {
        self.playing = false;
        self.position = 0.0;
        Ok(())
    }

    fn seek(&mut self, position_secs: f32) -> Result<(), String> {
        self.seek_calls += 1;
        self.position = position_secs.clamp(0.0, self.duration);
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> Result<(), String> {
        self.volume = volume.clamp(0.0, 1.0);
        Ok(())
    }

    fn position(&self) -> f32 {
        self.position
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn is_available(&self) -> bool {
        true
    }
}
