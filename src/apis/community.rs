use crate::client::ModelsLabClient;
use crate::error::ModelsLabError;
use crate::types::community::{
    ControlNetRequest, ImageResponse, ImageToImageRequest, InpaintingRequest, TextToImageRequest,
};
use crate::types::ApiResponse;

use super::BaseApi;

/// Community-model image generation (`images`).
#[derive(Clone, Debug)]
pub struct CommunityApi {
    base: BaseApi,
}

impl CommunityApi {
    pub fn new(client: ModelsLabClient, enterprise: bool) -> Result<Self, ModelsLabError> {
        Ok(Self {
            base: BaseApi::new(client, enterprise, "images")?,
        })
    }

    pub fn base(&self) -> &BaseApi {
        &self.base
    }

    pub async fn fetch(&self, id: &str) -> Result<ApiResponse, ModelsLabError> {
        self.base.fetch(id).await
    }

    pub async fn text_to_image(&self, request: &TextToImageRequest) -> Result<ImageResponse, ModelsLabError> {
        self.base.call("text2img", request).await
    }

    pub async fn image_to_image(&self, request: &ImageToImageRequest) -> Result<ImageResponse, ModelsLabError> {
        self.base.call("img2img", request).await
    }

    pub async fn inpainting(&self, request: &InpaintingRequest) -> Result<ImageResponse, ModelsLabError> {
        self.base.call("inpaint", request).await
    }

    pub async fn controlnet(&self, request: &ControlNetRequest) -> Result<ImageResponse, ModelsLabError> {
        self.base.call("controlnet", request).await
    }
}
