//! Schemas for the `image_editing` endpoints.

use serde::{Deserialize, Serialize};

use super::{BaseRequest, BaseResponse, FileInput};
use crate::validation::{Validate, ValidationError, Validator};

/// Extends `image` beyond its borders.
#[derive(Serialize, Debug, Clone, Default)]
pub struct OutpaintingRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    pub image: FileInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl OutpaintingRequest {
    pub fn new(prompt: impl Into<String>, image: FileInput) -> Self {
        Self {
            prompt: prompt.into(),
            image,
            ..Default::default()
        }
    }
}

impl Validate for OutpaintingRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        self.image.check("image", &mut v);
        v.range("width", self.width, 64, 2048);
        v.range("height", self.height, 64, 2048);
        v.range("overlap_width", self.overlap_width, 0, 512);
        v.range("num_inference_steps", self.num_inference_steps, 1, 150);
        v.range("guidance_scale", self.guidance_scale, 1.0, 30.0);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct BackgroundRemoverRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub image: FileInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_matting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_process_mask: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_mask: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse_mask: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_matting_foreground_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_matting_background_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_matting_erode_size: Option<u32>,
}

impl BackgroundRemoverRequest {
    pub fn new(image: FileInput) -> Self {
        Self {
            image,
            ..Default::default()
        }
    }
}

impl Validate for BackgroundRemoverRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.image.check("image", &mut v);
        v.range(
            "alpha_matting_foreground_threshold",
            self.alpha_matting_foreground_threshold,
            0,
            255,
        );
        v.range(
            "alpha_matting_background_threshold",
            self.alpha_matting_background_threshold,
            0,
            255,
        );
        v.range("alpha_matting_erode_size", self.alpha_matting_erode_size, 0, 50);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct SuperResolutionRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub init_image: FileInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    /// Upscale factor, 1 to 8.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_enhance: Option<bool>,
}

impl SuperResolutionRequest {
    pub fn new(init_image: FileInput) -> Self {
        Self {
            init_image,
            ..Default::default()
        }
    }
}

impl Validate for SuperResolutionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.init_image.check("init_image", &mut v);
        v.range("scale", self.scale, 1, 8);
        v.finish()
    }
}

/// Virtual try-on: dresses the person in `init_image` with `cloth_image`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct FashionRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub init_image: FileInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloth_image: Option<FileInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloth_type: Option<String>,
}

impl FashionRequest {
    pub fn new(init_image: FileInput) -> Self {
        Self {
            init_image,
            ..Default::default()
        }
    }
}

impl Validate for FashionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.init_image.check("init_image", &mut v);
        v.range("width", self.width, 64, 2048);
        v.range("height", self.height, 64, 2048);
        v.range("num_inference_steps", self.num_inference_steps, 1, 150);
        FileInput::check_optional(self.cloth_image.as_ref(), "cloth_image", &mut v);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ObjectRemovalRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub init_image: FileInput,
    pub mask_image: FileInput,
}

impl ObjectRemovalRequest {
    pub fn new(init_image: FileInput, mask_image: FileInput) -> Self {
        Self {
            init_image,
            mask_image,
            ..Default::default()
        }
    }
}

impl Validate for ObjectRemovalRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.init_image.check("init_image", &mut v);
        self.mask_image.check("mask_image", &mut v);
        v.finish()
    }
}

/// Portrait generation from a face reference. Shared by the face gen,
/// headshot and flux headshot endpoints, which accept the same body.
#[derive(Serialize, Debug, Clone, Default)]
pub struct FaceGenRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_image: Option<FileInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_checker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_checker_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

pub type HeadshotRequest = FaceGenRequest;
pub type FluxHeadshotRequest = FaceGenRequest;

impl FaceGenRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for FaceGenRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        FileInput::check_optional(self.face_image.as_ref(), "face_image", &mut v);
        v.range("width", self.width, 64, 2048);
        v.range("height", self.height, 64, 2048);
        v.range("num_inference_steps", self.num_inference_steps, 1, 150);
        v.range("guidance_scale", self.guidance_scale, 1.0, 30.0);
        v.range("s_scale", self.s_scale, 1.0, 30.0);
        v.range("samples", self.samples, 1, 10);
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
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
        v.range("width", self.width, 64, 2048);
        v.range("height", self.height, 64, 2048);
        v.range("num_inference_steps", self.num_inference_steps, 1, 150);
        v.range("guidance_scale", self.guidance_scale, 1.0, 30.0);
        v.range("samples", self.samples, 1, 10);
        v.finish()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ImageEditingResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "super::lenient")]
    pub result_url: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub result_data: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub process_time: Option<f64>,
}
