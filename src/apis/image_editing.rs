use crate::client::ModelsLabClient;
use crate::error::ModelsLabError;
use crate::types::image_editing::{
    BackgroundRemoverRequest, FaceGenRequest, FashionRequest, FluxHeadshotRequest,
    HeadshotRequest, ImageEditingResponse, InpaintingRequest, ObjectRemovalRequest,
    OutpaintingRequest, SuperResolutionRequest,
};
use crate::types::ApiResponse;

use super::BaseApi;

/// Edits on existing images (`image_editing`).
#[derive(Clone, Debug)]
pub struct ImageEditingApi {
    base: BaseApi,
}

impl ImageEditingApi {
    pub fn new(client: ModelsLabClient, enterprise: bool) -> Result<Self, ModelsLabError> {
        Ok(Self {
            base: BaseApi::new(client, enterprise, "image_editing")?,
        })
    }

    pub fn base(&self) -> &BaseApi {
        &self.base
    }

    pub async fn fetch(&self, id: &str) -> Result<ApiResponse, ModelsLabError> {
        self.base.fetch(id).await
    }

    pub async fn outpainting(
        &self,
        request: &OutpaintingRequest,
    ) -> Result<ImageEditingResponse, ModelsLabError> {
        self.base.call("outpaint", request).await
    }

    /// Cuts the subject out of `image`. Posts to `removebg_mask`.
    pub async fn background_remover(
        &self,
        request: &BackgroundRemoverRequest,
    ) -> Result<ImageEditingResponse, ModelsLabError> {
        self.base.call("removebg_mask", request).await
    }

    pub async fn super_resolution(
        &self,
        request: &SuperResolutionRequest,
    ) -> Result<ImageEditingResponse, ModelsLabError> {
        self.base.call("super_resolution", request).await
    }

    pub async fn fashion(&self, request: &FashionRequest) -> Result<ImageEditingResponse, ModelsLabError> {
        self.base.call("fashion", request).await
    }

    pub async fn object_remover(
        &self,
        request: &ObjectRemovalRequest,
    ) -> Result<ImageEditingResponse, ModelsLabError> {
        self.base.call("object_removal", request).await
    }

    pub async fn face_gen(&self, request: &FaceGenRequest) -> Result<ImageEditingResponse, ModelsLabError> {
        self.base.call("face_gen", request).await
    }

    pub async fn inpainting(
        &self,
        request: &InpaintingRequest,
    ) -> Result<ImageEditingResponse, ModelsLabError> {
        self.base.call("inpaint", request).await
    }

    pub async fn headshot(&self, request: &HeadshotRequest) -> Result<ImageEditingResponse, ModelsLabError> {
        self.base.call("head_shot", request).await
    }

    pub async fn flux_headshot(
        &self,
        request: &FluxHeadshotRequest,
    ) -> Result<ImageEditingResponse, ModelsLabError> {
        self.base.call("flux_headshot", request).await
    }
}
