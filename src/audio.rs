//! Sound cue collaborator
//!
//! The sim queues named cues; this manager dispatches them fire-and-forget.
//! Gameplay never waits on audio and must behave identically when the
//! backend is unavailable, so every path here degrades to a no-op.

/// Sound effect cues the simulation can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fires
    Shoot,
    /// Player takes a hit (shielded or not)
    Hit,
    /// Enemy destroyed
    Boom,
    /// Power-up collected or wave advanced
    Power,
    /// Boss warning
    Boss,
}

impl SoundEffect {
    /// Stable cue name for the playback backend
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "shoot",
            SoundEffect::Hit => "hit",
            SoundEffect::Boom => "boom",
            SoundEffect::Power => "power",
            SoundEffect::Boss => "boss",
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    enabled: bool,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AudioManager {
    /// Create the manager. If the playback backend cannot be initialized the
    /// manager stays alive but every cue becomes a no-op.
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            log::info!("Audio disabled by settings");
        }
        Self {
            enabled,
            master_volume: 0.30,
            sfx_volume: 0.65,
            muted: false,
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

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound cue, fire-and-forget
    pub fn play(&self, effect: SoundEffect) {
        if !self.enabled || self.effective_volume() <= 0.0 {
            return;
        }
        log::trace!("sfx: {}", effect.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names() {
        assert_eq!(SoundEffect::Shoot.name(), "shoot");
        assert_eq!(SoundEffect::Boss.name(), "boss");
    }

    #[test]
    fn test_disabled_manager_is_noop() {
        let audio = AudioManager::new(false);
        assert!(!audio.is_enabled());
        // Must not panic or block
        audio.play(SoundEffect::Boom);
    }

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new(true);
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        assert_eq!(audio.effective_volume(), 0.0);
    }
}
