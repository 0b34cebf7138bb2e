use crate::client::ModelsLabClient;
use crate::error::ModelsLabError;
use crate::types::audio::{
    AudioResponse, LyricsGeneratorRequest, LyricsResponse, MusicGenRequest, SfxRequest,
    SongGeneratorRequest, SpeechToTextRequest, TextToAudioRequest, TextToSpeechRequest,
    TranscriptionResponse, VoiceCoverRequest, VoiceToVoiceRequest,
};
use crate::types::ApiResponse;

use super::BaseApi;

/// Speech, voice conversion, music and sound effects (`voice`).
#[derive(Clone, Debug)]
pub struct AudioApi {
    base: BaseApi,
}

impl AudioApi {
    pub fn new(client: ModelsLabClient, enterprise: bool) -> Result<Self, ModelsLabError> {
        Ok(Self {
            base: BaseApi::new(client, enterprise, "voice")?,
        })
    }

    pub fn base(&self) -> &BaseApi {
        &self.base
    }

    pub async fn fetch(&self, id: &str) -> Result<ApiResponse, ModelsLabError> {
        self.base.fetch(id).await
    }

    /// Reads `prompt` aloud, in the voice of `init_audio` when one is given.
    pub async fn text_to_audio(&self, request: &TextToAudioRequest) -> Result<AudioResponse, ModelsLabError> {
        self.base.call("text_to_audio", request).await
    }

    /// Reads `prompt` with one of the stock voices.
    pub async fn text_to_speech(&self, request: &TextToSpeechRequest) -> Result<AudioResponse, ModelsLabError> {
        self.base.call("text_to_speech", request).await
    }

    pub async fn voice_to_voice(&self, request: &VoiceToVoiceRequest) -> Result<AudioResponse, ModelsLabError> {
        self.base.call("voice_to_voice", request).await
    }

    pub async fn voice_cover(&self, request: &VoiceCoverRequest) -> Result<AudioResponse, ModelsLabError> {
        self.base.call("voice_cover", request).await
    }

    pub async fn music_gen(&self, request: &MusicGenRequest) -> Result<AudioResponse, ModelsLabError> {
        self.base.call("music_gen", request).await
    }

    pub async fn lyrics_gen(&self, request: &LyricsGeneratorRequest) -> Result<LyricsResponse, ModelsLabError> {
        self.base.call("lyrics_generator", request).await
    }

    pub async fn song_generator(&self, request: &SongGeneratorRequest) -> Result<AudioResponse, ModelsLabError> {
        self.base.call("song_generator", request).await
    }

    /// Transcribes the audio behind `audio_url`.
    pub async fn speech_to_text(
        &self,
        request: &SpeechToTextRequest,
    ) -> Result<TranscriptionResponse, ModelsLabError> {
        self.base.call("speech_to_text", request).await
    }

    pub async fn sfx_gen(&self, request: &SfxRequest) -> Result<AudioResponse, ModelsLabError> {
        self.base.call("sfx", request).await
    }
}
