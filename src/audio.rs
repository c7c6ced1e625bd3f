//! Sound cues and volume gating
//!
//! The simulation only names the cue; playback belongs to the presentation
//! layer, which asks the mixer how loud (if at all) to play it.

use crate::settings::AudioSettings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Balloon popped by a bird
    Pop,
    /// Round ended
    GameOver,
}

impl SoundEffect {
    /// Per-effect loudness relative to the sfx channel
    fn gain(self) -> f32 {
        match self {
            SoundEffect::Pop => 1.0,
            SoundEffect::GameOver => 0.8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Pop => "pop",
            SoundEffect::GameOver => "game_over",
        }
    }
}

/// Volume state shared by every playback backend
#[derive(Debug, Clone)]
pub struct AudioMixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::from_settings(&AudioSettings::default())
    }
}

impl AudioMixer {
    pub fn from_settings(settings: &AudioSettings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Volume to play `effect` at, or `None` when it should stay silent
    pub fn volume_for(&self, effect: SoundEffect) -> Option<f32> {
        let vol = self.effective_volume() * effect.gain();
        (vol > 0.0).then_some(vol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_volume() {
        let mixer = AudioMixer::default();
        let vol = mixer.volume_for(SoundEffect::Pop).unwrap();
        assert!((vol - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_muted_is_silent() {
        let mut mixer = AudioMixer::default();
        mixer.set_muted(true);
        assert_eq!(mixer.volume_for(SoundEffect::Pop), None);
        assert_eq!(mixer.volume_for(SoundEffect::GameOver), None);
    }

    #[test]
    fn test_volume_clamped() {
        let mut mixer = AudioMixer::default();
        mixer.set_master_volume(3.0);
        mixer.set_sfx_volume(-1.0);
        assert_eq!(mixer.volume_for(SoundEffect::Pop), None);
        mixer.set_sfx_volume(0.5);
        assert!((mixer.volume_for(SoundEffect::Pop).unwrap() - 0.5).abs() < 1e-6);
    }
}
