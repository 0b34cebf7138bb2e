use crate::client::ModelsLabClient;
use crate::error::ModelsLabError;
use crate::types::video::{
    ImageToVideoRequest, TextToVideoRequest, TextToVideoUltraRequest, VideoResponse,
};
use crate::types::ApiResponse;

use super::BaseApi;

/// Video generation (`video`). Results usually arrive as `processing` and
/// are collected with [`fetch`](Self::fetch).
#[derive(Clone, Debug)]
pub struct VideoApi {
    base: BaseApi,
}

impl VideoApi {
    pub fn new(client: ModelsLabClient, enterprise: bool) -> Result<Self, ModelsLabError> {
        Ok(Self {
            base: BaseApi::new(client, enterprise, "video")?,
        })
    }

    pub fn base(&self) -> &BaseApi {
        &self.base
    }

    pub async fn fetch(&self, id: &str) -> Result<ApiResponse, ModelsLabError> {
        self.base.fetch(id).await
    }

    pub async fn text_to_video(&self, request: &TextToVideoRequest) -> Result<VideoResponse, ModelsLabError> {
        self.base.call("text2video", request).await
    }

    pub async fn image_to_video(&self, request: &ImageToVideoRequest) -> Result<VideoResponse, ModelsLabError> {
        self.base.call("img2video", request).await
    }

    pub async fn text_to_video_ultra(
        &self,
        request: &TextToVideoUltraRequest,
    ) -> Result<VideoResponse, ModelsLabError> {
        self.base.call("text2video_ultra", request).await
    }
}
