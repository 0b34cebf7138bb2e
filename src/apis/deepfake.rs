use crate::client::ModelsLabClient;
use crate::error::ModelsLabError;
use crate::types::deepfake::{
    DeepfakeResponse, MultipleFaceSwapRequest, SingleVideoSwapRequest, SpecificFaceSwapRequest,
    SpecificVideoSwapRequest,
};
use crate::types::ApiResponse;

use super::BaseApi;

/// Face swapping on images and videos (`deepfake`).
#[derive(Clone, Debug)]
pub struct DeepfakeApi {
    base: BaseApi,
}

impl DeepfakeApi {
    pub fn new(client: ModelsLabClient, enterprise: bool) -> Result<Self, ModelsLabError> {
        Ok(Self {
            base: BaseApi::new(client, enterprise, "deepfake")?,
        })
    }

    pub fn base(&self) -> &BaseApi {
        &self.base
    }

    pub async fn fetch(&self, id: &str) -> Result<ApiResponse, ModelsLabError> {
        self.base.fetch(id).await
    }

    /// Swaps one chosen face in `init_image`. Posts to `single_face_swap`.
    pub async fn specific_face_swap(
        &self,
        request: &SpecificFaceSwapRequest,
    ) -> Result<DeepfakeResponse, ModelsLabError> {
        self.base.call("single_face_swap", request).await
    }

    pub async fn multiple_face_swap(
        &self,
        request: &MultipleFaceSwapRequest,
    ) -> Result<DeepfakeResponse, ModelsLabError> {
        self.base.call("multiple_face_swap", request).await
    }

    pub async fn specific_video_swap(
        &self,
        request: &SpecificVideoSwapRequest,
    ) -> Result<DeepfakeResponse, ModelsLabError> {
        self.base.call("specific_video_swap", request).await
    }

    pub async fn single_video_swap(
        &self,
        request: &SingleVideoSwapRequest,
    ) -> Result<DeepfakeResponse, ModelsLabError> {
        self.base.call("single_video_swap", request).await
    }
}
