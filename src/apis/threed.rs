use crate::client::ModelsLabClient;
use crate::error::ModelsLabError;
use crate::types::threed::{ImageTo3DRequest, TextTo3DRequest, ThreeDResponse};
use crate::types::ApiResponse;

use super::BaseApi;

/// Mesh generation (`3d`).
#[derive(Clone, Debug)]
pub struct ThreeDApi {
    base: BaseApi,
}

impl ThreeDApi {
    pub fn new(client: ModelsLabClient, enterprise: bool) -> Result<Self, ModelsLabError> {
        Ok(Self {
            base: BaseApi::new(client, enterprise, "3d")?,
        })
    }

    pub fn base(&self) -> &BaseApi {
        &self.base
    }

    pub async fn fetch(&self, id: &str) -> Result<ApiResponse, ModelsLabError> {
        self.base.fetch(id).await
    }

    /// Generates a mesh from a text prompt.
    ///
    /// # Returns
    ///
    /// A [`ThreeDResponse`]. While the mesh is still rendering its `base.status`
    /// is `processing` and `base.id` feeds [`fetch`](Self::fetch).
    pub async fn text_to_3d(&self, request: &TextTo3DRequest) -> Result<ThreeDResponse, ModelsLabError> {
        self.base.call("text_to_3d", request).await
    }

    pub async fn image_to_3d(&self, request: &ImageTo3DRequest) -> Result<ThreeDResponse, ModelsLabError> {
        self.base.call("image_to_3d", request).await
    }
}
