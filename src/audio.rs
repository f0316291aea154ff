//! Audio cues
//!
//! Procedurally generated sound effects - no external files needed.
//! Each cue is a short tone sequence appended to a detached sink, so
//! playback is fire-and-forget and never blocks the game loop.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Correct monster caught
    Catch,
    /// Wrong monster touched
    Die,
    /// Warp charge spent
    Warp,
    /// New round started
    NextLevel,
}

impl SoundEffect {
    /// Cue for a gameplay event
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::Catch => SoundEffect::Catch,
            GameEvent::Die => SoundEffect::Die,
            GameEvent::Warp => SoundEffect::Warp,
            GameEvent::LevelUp => SoundEffect::NextLevel,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    stream: Option<OutputStream>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail on machines without an audio device; the game stays playable
        let stream = OutputStreamBuilder::open_default_stream().ok();
        if stream.is_none() {
            log::warn!("failed to open audio output - sound disabled");
        }
        Self {
            stream,
            master_volume: 0.8,
            sfx_volume: 1.0,
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

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(stream) = &self.stream else { return };

        let sink = Sink::connect_new(stream.mixer());
        match effect {
            // Quick rising ding
            SoundEffect::Catch => Self::append_notes(&sink, &[(660.0, 70), (880.0, 90)], vol * 0.5),
            // Sad descending triad
            SoundEffect::Die => {
                Self::append_notes(&sink, &[(330.0, 120), (262.0, 120), (196.0, 180)], vol * 0.5)
            }
            // Upward sweep
            SoundEffect::Warp => {
                Self::append_notes(&sink, &[(220.0, 40), (440.0, 40), (880.0, 80)], vol * 0.4)
            }
            // Triumphant fanfare
            SoundEffect::NextLevel => Self::append_notes(
                &sink,
                &[(392.0, 100), (494.0, 100), (587.0, 100), (784.0, 200)],
                vol * 0.5,
            ),
        }
        sink.detach();
    }

    fn append_notes(sink: &Sink, notes: &[(f32, u64)], amp: f32) {
        for &(freq, ms) in notes {
            let mut tone = SineWave::new(freq).take_duration(Duration::from_millis(ms));
            tone.set_filter_fadeout();
            sink.append(tone.amplify(amp));
        }
    }
}
