use crate::client::ModelsLabClient;
use crate::error::ModelsLabError;
use crate::types::realtime::{
    ImageToImageRequest, InpaintingRequest, RealtimeResponse, TextToImageRequest,
};
use crate::types::ApiResponse;

use super::BaseApi;

/// Low-latency image generation (`realtime`).
#[derive(Clone, Debug)]
pub struct RealtimeApi {
    base: BaseApi,
}

impl RealtimeApi {
    pub fn new(client: ModelsLabClient, enterprise: bool) -> Result<Self, ModelsLabError> {
        Ok(Self {
            base: BaseApi::new(client, enterprise, "realtime")?,
        })
    }

    pub fn base(&self) -> &BaseApi {
        &self.base
    }

    pub async fn fetch(&self, id: &str) -> Result<ApiResponse, ModelsLabError> {
        self.base.fetch(id).await
    }

    pub async fn text_to_image(&self, request: &TextToImageRequest) -> Result<RealtimeResponse, ModelsLabError> {
        self.base.call("text2img", request).await
    }

    pub async fn image_to_image(
        &self,
        request: &ImageToImageRequest,
    ) -> Result<RealtimeResponse, ModelsLabError> {
        self.base.call("img2img", request).await
    }

    pub async fn inpainting(&self, request: &InpaintingRequest) -> Result<RealtimeResponse, ModelsLabError> {
        self.base.call("inpaint", request).await
    }
}
