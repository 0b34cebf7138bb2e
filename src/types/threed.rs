//! Schemas for the `3d` mesh generation endpoints.

use serde::{Deserialize, Serialize};

use super::{BaseRequest, BaseResponse, FileInput};
use crate::validation::{Validate, ValidationError, Validator};

const MESH_FORMATS: &[&str] = &["obj", "ply", "glb"];

#[derive(Serialize, Debug, Clone, Default)]
pub struct TextTo3DRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// `obj`, `ply` or `glb`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ss_guidance_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slat_guidance_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slat_sampling_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_simplify: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_bg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<bool>,
}

impl TextTo3DRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

impl Validate for TextTo3DRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        v.required("prompt", &self.prompt);
        v.one_of("output_format", self.output_format.as_deref(), MESH_FORMATS);
        v.range("guidance_scale", self.guidance_scale, 1.0, 30.0);
        v.range("num_inference_steps", self.num_inference_steps, 1, 150);
        v.range("ss_guidance_strength", self.ss_guidance_strength, 0.0, 10.0);
        v.range("slat_guidance_strength", self.slat_guidance_strength, 0.0, 10.0);
        v.range("slat_sampling_steps", self.slat_sampling_steps, 1, 100);
        v.range("mesh_simplify", self.mesh_simplify, 0.0, 1.0);
        v.range("foreground_ratio", self.foreground_ratio, 0.0, 1.0);
        v.min("chunk_size", self.chunk_size, 1);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ImageTo3DRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub image: FileInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ss_guidance_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slat_guidance_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slat_sampling_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_simplify: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<bool>,
}

impl ImageTo3DRequest {
    pub fn new(image: FileInput) -> Self {
        Self {
            image,
            ..Default::default()
        }
    }
}

impl Validate for ImageTo3DRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.image.check("image", &mut v);
        v.range("resolution", self.resolution, 64, 2048);
        v.one_of("output_format", self.output_format.as_deref(), MESH_FORMATS);
        v.range("ss_guidance_strength", self.ss_guidance_strength, 0.0, 10.0);
        v.range("slat_guidance_strength", self.slat_guidance_strength, 0.0, 10.0);
        v.range("slat_sampling_steps", self.slat_sampling_steps, 1, 100);
        v.range("mesh_simplify", self.mesh_simplify, 0.0, 1.0);
        v.min("chunk_size", self.chunk_size, 1);
        v.finish()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ThreeDResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "super::lenient")]
    pub model_url: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub model_data: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub render_url: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub render_data: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub meshes: Option<Vec<String>>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub process_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_format_must_be_known() {
        let req = TextTo3DRequest {
            output_format: Some("fbx".into()),
            chunk_size: Some(0),
            ..TextTo3DRequest::new("a chair")
        };
        assert_eq!(req.validate().unwrap_err().fields(), vec!["output_format", "chunk_size"]);

        let req = ImageTo3DRequest {
            output_format: Some("glb".into()),
            ..ImageTo3DRequest::new(FileInput::from_url("https://example.com/chair.png"))
        };
        assert!(req.validate().is_ok());
    }
}
