//! Voice personality settings for spoken responses.

use serde::{Deserialize, Serialize};

/// Voices the external speech surface knows how to render.
pub const VOICE_NAMES: [&str; 5] = [
    "Google US English",
    "Google UK English Male",
    "Google UK English Female",
    "Microsoft Zira Desktop - English (United States)",
    "Microsoft David Desktop - English (United States)",
];

/// Lower slider bound for pitch and rate.
pub const SPEECH_PARAM_MIN: f32 = 0.5;

/// Upper slider bound for pitch and rate.
pub const SPEECH_PARAM_MAX: f32 = 2.0;

/// Playback personality for one session. Pitch and rate stay within the
/// slider bounds; `clamp` re-establishes that after any control update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub voice: String,
    pub pitch: f32,
    pub rate: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            voice: VOICE_NAMES[0].to_string(),
            pitch: 1.0,
            rate: 1.0,
        }
    }
}

impl VoiceSettings {
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(SPEECH_PARAM_MIN, SPEECH_PARAM_MAX);
    }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate.clamp(SPEECH_PARAM_MIN, SPEECH_PARAM_MAX);
    }

    /// Pull both parameters back into the slider bounds.
    pub fn clamp(&mut self) {
        self.pitch = self.pitch.clamp(SPEECH_PARAM_MIN, SPEECH_PARAM_MAX);
        self.rate = self.rate.clamp(SPEECH_PARAM_MIN, SPEECH_PARAM_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_bounds() {
        let settings = VoiceSettings::default();
        assert_eq!(settings.voice, "Google US English");
        assert_eq!(settings.pitch, 1.0);
        assert_eq!(settings.rate, 1.0);
    }

    #[test]
    fn setters_clamp_to_bounds() {
        let mut settings = VoiceSettings::default();

        settings.set_pitch(5.0);
        assert_eq!(settings.pitch, SPEECH_PARAM_MAX);

        settings.set_rate(0.01);
        assert_eq!(settings.rate, SPEECH_PARAM_MIN);
    }

    #[test]
    fn clamp_repairs_out_of_range_values() {
        let mut settings = VoiceSettings {
            voice: VOICE_NAMES[2].to_string(),
            pitch: -1.0,
            rate: 9.5,
        };

        settings.clamp();
        assert_eq!(settings.pitch, SPEECH_PARAM_MIN);
        assert_eq!(settings.rate, SPEECH_PARAM_MAX);
    }

    #[test]
    fn roster_has_five_voices() {
        assert_eq!(VOICE_NAMES.len(), 5);
    }
}
