//! Schemas for the interior and exterior design endpoints (`interior`).

use serde::{Deserialize, Serialize};

use super::{BaseRequest, BaseResponse, FileInput};
use crate::validation::{Validate, ValidationError, Validator};

/// Restyles a room photo. Every interior endpoint except `scenario` takes this body.
#[derive(Serialize, Debug, Clone, Default)]
pub struct InteriorRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_image: Option<FileInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    /// How far the result may drift from `init_image`, 0 to 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
}

pub type RoomDecoratorRequest = InteriorRequest;
pub type FloorRequest = InteriorRequest;
pub type ExteriorRequest = InteriorRequest;
pub type SketchRenderingRequest = InteriorRequest;

impl InteriorRequest {
    pub fn new(prompt: impl Into<String>, init_image: FileInput) -> Self {
        Self {
            prompt: prompt.into(),
            init_image: Some(init_image),
            ..Default::default()
        }
    }

    fn check(&self, v: &mut Validator) {
        self.base.check(v);
        v.required("prompt", &self.prompt);
        FileInput::check_optional(self.init_image.as_ref(), "init_image", v);
        v.range("strength", self.strength, 0.0, 2.0);
        v.range("guidance_scale", self.guidance_scale, 1.0, 30.0);
        v.range("num_inference_steps", self.num_inference_steps, 1, 150);
    }
}

impl Validate for InteriorRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.check(&mut v);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ScenarioRequest {
    #[serde(flatten)]
    pub design: InteriorRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
}

impl Validate for ScenarioRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.design.check(&mut v);
        v.finish()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct InteriorResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "super::lenient")]
    pub result_url: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub result_data: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub process_time: Option<f64>,
}
