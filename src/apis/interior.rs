use crate::client::ModelsLabClient;
use crate::error::ModelsLabError;
use crate::types::interior::{
    ExteriorRequest, FloorRequest, InteriorRequest, InteriorResponse, RoomDecoratorRequest,
    ScenarioRequest, SketchRenderingRequest,
};
use crate::types::ApiResponse;

use super::BaseApi;

/// Interior and exterior design (`interior`).
#[derive(Clone, Debug)]
pub struct InteriorApi {
    base: BaseApi,
}

impl InteriorApi {
    pub fn new(client: ModelsLabClient, enterprise: bool) -> Result<Self, ModelsLabError> {
        Ok(Self {
            base: BaseApi::new(client, enterprise, "interior")?,
        })
    }

    pub fn base(&self) -> &BaseApi {
        &self.base
    }

    pub async fn fetch(&self, id: &str) -> Result<ApiResponse, ModelsLabError> {
        self.base.fetch(id).await
    }

    /// Restyles a room photo. Posts to `make`.
    pub async fn interior(&self, request: &InteriorRequest) -> Result<InteriorResponse, ModelsLabError> {
        self.base.call("make", request).await
    }

    pub async fn room_decorator(
        &self,
        request: &RoomDecoratorRequest,
    ) -> Result<InteriorResponse, ModelsLabError> {
        self.base.call("room_decorator", request).await
    }

    pub async fn floor(&self, request: &FloorRequest) -> Result<InteriorResponse, ModelsLabError> {
        self.base.call("floor_planning", request).await
    }

    pub async fn scenario(&self, request: &ScenarioRequest) -> Result<InteriorResponse, ModelsLabError> {
        self.base.call("scenario", request).await
    }

    pub async fn exterior_restorer(
        &self,
        request: &ExteriorRequest,
    ) -> Result<InteriorResponse, ModelsLabError> {
        self.base.call("exterior_restorer", request).await
    }

    pub async fn sketch_rendering(
        &self,
        request: &SketchRenderingRequest,
    ) -> Result<InteriorResponse, ModelsLabError> {
        self.base.call("sketch_rendering", request).await
    }
}
