//! Schemas for the community model endpoints (`images`).

use serde::{Deserialize, Serialize};

use super::{BaseRequest, BaseResponse, FileInput};
use crate::validation::{Validate, ValidationError, Validator};

/// Generation settings shared by every community model request.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CommunityOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    /// `"yes"` / `"no"`, as the API expects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_checker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhance_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_lingual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panorama: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_attention: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lora_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lora_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_skip: Option<u32>,
}

impl CommunityOptions {
    fn check(&self, v: &mut Validator) {
        v.range("width", self.width, 64, 2048);
        v.range("height", self.height, 64, 2048);
        v.range("samples", self.samples, 1, 10);
        v.range("num_inference_steps", self.num_inference_steps, 1, 150);
        v.range("guidance_scale", self.guidance_scale, 1.0, 30.0);
        v.range("lora_strength", self.lora_strength, 0.0, 2.0);
        v.range("clip_skip", self.clip_skip, 1, 12);
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct TextToImageRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(flatten)]
    pub options: CommunityOptions,
}

impl TextToImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for TextToImageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        self.options.check(&mut v);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ImageToImageRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_image: Option<FileInput>,
    #[serde(flatten)]
    pub options: CommunityOptions,
}

impl ImageToImageRequest {
    pub fn new(prompt: impl Into<String>, init_image: FileInput) -> Self {
        Self {
            prompt: prompt.into(),
            init_image: Some(init_image),
            ..Default::default()
        }
    }
}

impl Validate for ImageToImageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        FileInput::check_optional(self.init_image.as_ref(), "init_image", &mut v);
        self.options.check(&mut v);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct InpaintingRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_image: Option<FileInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_image: Option<FileInput>,
    #[serde(flatten)]
    pub options: CommunityOptions,
}

impl InpaintingRequest {
    pub fn new(prompt: impl Into<String>, init_image: FileInput, mask_image: FileInput) -> Self {
        Self {
            prompt: prompt.into(),
            init_image: Some(init_image),
            mask_image: Some(mask_image),
            ..Default::default()
        }
    }
}

impl Validate for InpaintingRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        FileInput::check_optional(self.init_image.as_ref(), "init_image", &mut v);
        FileInput::check_optional(self.mask_image.as_ref(), "mask_image", &mut v);
        self.options.check(&mut v);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ControlNetRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_image: Option<FileInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_image: Option<FileInput>,
    #[serde(flatten)]
    pub options: CommunityOptions,
    #[serde(rename = "controlnet_model", skip_serializing_if = "Option::is_none")]
    pub control_net_model: Option<String>,
    #[serde(rename = "controlnet_type", skip_serializing_if = "Option::is_none")]
    pub control_net_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
}

impl ControlNetRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for ControlNetRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        FileInput::check_optional(self.init_image.as_ref(), "init_image", &mut v);
        FileInput::check_optional(self.mask_image.as_ref(), "mask_image", &mut v);
        self.options.check(&mut v);
        v.range("strength", self.strength, 0.0, 2.0);
        v.finish()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ImageResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "super::lenient")]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub image_data: Option<Vec<String>>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub seed: Option<i64>,
}
