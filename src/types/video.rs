//! Schemas for the `video` generation endpoints.

use serde::{Deserialize, Serialize};

use super::{BaseRequest, BaseResponse, FileInput};
use crate::validation::{Validate, ValidationError, Validator};

const ULTRA_RESOLUTIONS: &[&str] = &["512x512", "768x768", "1024x1024", "1024x576", "576x1024"];

#[derive(Serialize, Debug, Clone, Default)]
pub struct TextToVideoRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub model_id: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_frames: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
}

impl TextToVideoRequest {
    pub fn new(model_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for TextToVideoRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("model_id", &self.model_id);
        v.required("prompt", &self.prompt);
        check_frames(
            &mut v,
            self.width,
            self.height,
            self.num_frames,
            self.num_inference_steps,
            self.guidance_scale,
            self.fps,
        );
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ImageToVideoRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub model_id: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_frames: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_image: Option<FileInput>,
}

impl ImageToVideoRequest {
    pub fn new(model_id: impl Into<String>, prompt: impl Into<String>, init_image: FileInput) -> Self {
        Self {
            model_id: model_id.into(),
            prompt: prompt.into(),
            init_image: Some(init_image),
            ..Default::default()
        }
    }
}

impl Validate for ImageToVideoRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("model_id", &self.model_id);
        v.required("prompt", &self.prompt);
        check_frames(
            &mut v,
            self.width,
            self.height,
            self.num_frames,
            self.num_inference_steps,
            self.guidance_scale,
            self.fps,
        );
        FileInput::check_optional(self.init_image.as_ref(), "init_image", &mut v);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct TextToVideoUltraRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// One of `512x512`, `768x768`, `1024x1024`, `1024x576`, `576x1024`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_frames: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portrait: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_shift: Option<i32>,
}

impl TextToVideoUltraRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for TextToVideoUltraRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        v.one_of("resolution", self.resolution.as_deref(), ULTRA_RESOLUTIONS);
        check_frames(
            &mut v,
            None,
            None,
            self.num_frames,
            self.num_inference_steps,
            self.guidance_scale,
            self.fps,
        );
        v.finish()
    }
}

fn check_frames(
    v: &mut Validator,
    width: Option<u32>,
    height: Option<u32>,
    num_frames: Option<u32>,
    num_inference_steps: Option<u32>,
    guidance_scale: Option<f64>,
    fps: Option<u32>,
) {
    v.range("width", width, 64, 2048);
    v.range("height", height, 64, 2048);
    v.range("num_frames", num_frames, 1, 300);
    v.range("num_inference_steps", num_inference_steps, 1, 150);
    v.range("guidance_scale", guidance_scale, 1.0, 30.0);
    v.range("fps", fps, 1, 60);
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct VideoResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "super::lenient")]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub video_data: Option<String>,
    /// Seconds.
    #[serde(default, deserialize_with = "super::lenient")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub fps: Option<u32>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub height: Option<u32>,
}
