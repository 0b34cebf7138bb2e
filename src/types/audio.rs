//! Schemas for the `voice` endpoints: speech, music, lyrics, transcription and sound effects.

use serde::{Deserialize, Serialize};

use super::{BaseRequest, BaseResponse, FileInput};
use crate::validation::{Validate, ValidationError, Validator};

const SPEECH_FORMATS: &[&str] = &["wav", "mp3"];
const MUSIC_FORMATS: &[&str] = &["wav", "mp3", "flac"];
const BITRATES: &[&str] = &["128k", "192k", "320k"];
const TIMESTAMP_LEVELS: &[&str] = &["word", "sentence"];

/// Converts a text prompt to audio, optionally in the voice of `init_audio`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct TextToAudioRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_audio: Option<FileInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Playback speed, 0.1 to 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl TextToAudioRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for TextToAudioRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        FileInput::check_optional(self.init_audio.as_ref(), "init_audio", &mut v);
        v.range("speed", self.speed, 0.1, 10.0);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct TextToSpeechRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// `wav` or `mp3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<bool>,
}

impl TextToSpeechRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for TextToSpeechRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        v.range("speed", self.speed, 0.1, 10.0);
        v.one_of("output_format", self.output_format.as_deref(), SPEECH_FORMATS);
        v.finish()
    }
}

/// Re-voices `init_audio` with the voice found in `target_audio`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct VoiceToVoiceRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub init_audio: FileInput,
    pub target_audio: FileInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl VoiceToVoiceRequest {
    pub fn new(init_audio: FileInput, target_audio: FileInput) -> Self {
        Self {
            init_audio,
            target_audio,
            ..Default::default()
        }
    }
}

impl Validate for VoiceToVoiceRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.init_audio.check("init_audio", &mut v);
        self.target_audio.check("target_audio", &mut v);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct VoiceCoverRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub init_audio: FileInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originality: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_voice_volume_delta: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_voice_volume_delta: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_volume_delta: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverb_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wetness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dryness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<bool>,
}

impl VoiceCoverRequest {
    pub fn new(init_audio: FileInput) -> Self {
        Self {
            init_audio,
            ..Default::default()
        }
    }
}

impl Validate for VoiceCoverRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.init_audio.check("init_audio", &mut v);
        v.range("speed", self.speed, 0.1, 10.0);
        v.range("mix", self.mix, 0.0, 1.0);
        v.range("originality", self.originality, 0.0, 1.0);
        v.range("reverb_size", self.reverb_size, 0.0, 1.0);
        v.range("wetness", self.wetness, 0.0, 1.0);
        v.range("dryness", self.dryness, 0.0, 1.0);
        v.range("damping", self.damping, 0.0, 1.0);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct MusicGenRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_audio: Option<FileInput>,
    /// `wav`, `mp3` or `flac`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    /// `128k`, `192k` or `320k`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_token: Option<u32>,
    /// Hz, 8000 to 96000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_rate: Option<u32>,
}

impl MusicGenRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for MusicGenRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        FileInput::check_optional(self.init_audio.as_ref(), "init_audio", &mut v);
        v.one_of("output_format", self.output_format.as_deref(), MUSIC_FORMATS);
        v.one_of("bitrate", self.bitrate.as_deref(), BITRATES);
        v.min("max_new_token", self.max_new_token, 1);
        v.range("sampling_rate", self.sampling_rate, 8000, 96000);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct LyricsGeneratorRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
}

impl LyricsGeneratorRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for LyricsGeneratorRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct SongGeneratorRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_audio: Option<FileInput>,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
}

impl SongGeneratorRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for SongGeneratorRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        FileInput::check_optional(self.init_audio.as_ref(), "init_audio", &mut v);
        v.finish()
    }
}

/// Transcribes the audio found at `audio_url`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct SpeechToTextRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub audio_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_language: Option<String>,
    /// `word` or `sentence`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_level: Option<String>,
}

impl SpeechToTextRequest {
    pub fn new(audio_url: impl Into<String>) -> Self {
        Self {
            audio_url: audio_url.into(),
            ..Default::default()
        }
    }
}

impl Validate for SpeechToTextRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        if self.audio_url.trim().is_empty() {
            v.fail("audio_url", "is required");
        } else {
            v.url("audio_url", Some(&self.audio_url));
        }
        v.one_of("timestamp_level", self.timestamp_level.as_deref(), TIMESTAMP_LEVELS);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct SfxRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    /// Seconds, 1 to 300.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<bool>,
}

impl SfxRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for SfxRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        v.range("duration", self.duration, 1, 300);
        v.one_of("output_format", self.output_format.as_deref(), MUSIC_FORMATS);
        v.one_of("bitrate", self.bitrate.as_deref(), BITRATES);
        v.finish()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct AudioResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "super::lenient")]
    pub audio_url: Option<String>,
    /// Inline base64 audio, present when the request asked for `base64`.
    #[serde(default, deserialize_with = "super::lenient")]
    pub audio_data: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LyricsResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "super::lenient")]
    pub lyrics: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TranscriptionResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "super::lenient")]
    pub transcription: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub timestamps: Option<Vec<TranscriptionSegment>>,
}

/// A span of transcribed text with its timing in seconds.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TranscriptionSegment {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}
