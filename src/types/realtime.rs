//! Schemas for the low-latency `realtime` image endpoints.

use serde::{Deserialize, Serialize};

use super::{BaseRequest, BaseResponse, FileInput};
use crate::validation::{Validate, ValidationError, Validator};

/// Settings shared by every realtime request.
#[derive(Serialize, Debug, Clone, Default)]
pub struct RealtimeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<u32>,
}

impl RealtimeOptions {
    fn check(&self, v: &mut Validator) {
        v.range("strength", self.strength, 0.0, 2.0);
        v.range("guidance_scale", self.guidance_scale, 1.0, 30.0);
        v.range("num_inference_steps", self.num_inference_steps, 1, 150);
        v.range("width", self.width, 64, 2048);
        v.range("height", self.height, 64, 2048);
        v.range("samples", self.samples, 1, 10);
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct TextToImageRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_image: Option<FileInput>,
    #[serde(flatten)]
    pub options: RealtimeOptions,
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
        FileInput::check_optional(self.init_image.as_ref(), "init_image", &mut v);
        self.options.check(&mut v);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ImageToImageRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    pub init_image: FileInput,
    #[serde(flatten)]
    pub options: RealtimeOptions,
}

impl ImageToImageRequest {
    pub fn new(prompt: impl Into<String>, init_image: FileInput) -> Self {
        Self {
            prompt: prompt.into(),
            init_image,
            ..Default::default()
        }
    }
}

impl Validate for ImageToImageRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        self.init_image.check("init_image", &mut v);
        self.options.check(&mut v);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct InpaintingRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    pub init_image: FileInput,
    pub mask_image: FileInput,
    #[serde(flatten)]
    pub options: RealtimeOptions,
}

impl InpaintingRequest {
    pub fn new(prompt: impl Into<String>, init_image: FileInput, mask_image: FileInput) -> Self {
        Self {
            prompt: prompt.into(),
            init_image,
            mask_image,
            ..Default::default()
        }
    }
}

impl Validate for InpaintingRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        self.init_image.check("init_image", &mut v);
        self.mask_image.check("mask_image", &mut v);
        self.options.check(&mut v);
        v.finish()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RealtimeResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "super::lenient")]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub image_data: Option<Vec<String>>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub process_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shared_options_flatten_into_the_body() {
        let mut req = TextToImageRequest::new("neon city");
        req.options.width = Some(512);
        req.options.samples = Some(2);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"prompt": "neon city", "width": 512, "samples": 2})
        );
    }

    #[test]
    fn inpainting_needs_both_images() {
        let req = InpaintingRequest::new("patch", FileInput::default(), FileInput::default());
        assert_eq!(req.validate().unwrap_err().fields(), vec!["init_image", "mask_image"]);
    }
}
