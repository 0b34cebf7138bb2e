//! Schemas for the face swap endpoints (`deepfake`).

use serde::{Deserialize, Serialize};

use super::{BaseRequest, BaseResponse, FileInput};
use crate::validation::{Validate, ValidationError, Validator};

const VIDEO_FORMATS: &[&str] = &["mp4", "avi", "mov"];

/// Swaps the face from `reference_image` found in `target_image` with the one in `init_image`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct SpecificFaceSwapRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub init_image: FileInput,
    pub target_image: FileInput,
    pub reference_image: FileInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<bool>,
}

impl Validate for SpecificFaceSwapRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.init_image.check("init_image", &mut v);
        self.target_image.check("target_image", &mut v);
        self.reference_image.check("reference_image", &mut v);
        v.finish()
    }
}

/// Swaps every face in `target_image` with the face in `init_image`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct MultipleFaceSwapRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub init_image: FileInput,
    pub target_image: FileInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<bool>,
}

impl MultipleFaceSwapRequest {
    pub fn new(init_image: FileInput, target_image: FileInput) -> Self {
        Self {
            init_image,
            target_image,
            ..Default::default()
        }
    }
}

impl Validate for MultipleFaceSwapRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.init_image.check("init_image", &mut v);
        self.target_image.check("target_image", &mut v);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct SingleVideoSwapRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub init_image: FileInput,
    pub init_video: FileInput,
    /// `mp4`, `avi` or `mov`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<bool>,
}

impl SingleVideoSwapRequest {
    pub fn new(init_image: FileInput, init_video: FileInput) -> Self {
        Self {
            init_image,
            init_video,
            ..Default::default()
        }
    }
}

impl Validate for SingleVideoSwapRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.init_image.check("init_image", &mut v);
        self.init_video.check("init_video", &mut v);
        v.one_of("output_format", self.output_format.as_deref(), VIDEO_FORMATS);
        v.finish()
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct SpecificVideoSwapRequest {
    #[serde(flatten)]
    pub base: BaseRequest,
    pub init_image: FileInput,
    pub init_video: FileInput,
    pub reference_image: FileInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<bool>,
}

impl Validate for SpecificVideoSwapRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.base.check(&mut v);
        self.init_image.check("init_image", &mut v);
        self.init_video.check("init_video", &mut v);
        self.reference_image.check("reference_image", &mut v);
        v.one_of("output_format", self.output_format.as_deref(), VIDEO_FORMATS);
        v.finish()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct DeepfakeResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, deserialize_with = "super::lenient")]
    pub result_url: Option<String>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub result_data: Option<String>,
    /// Seconds spent on the remote side.
    #[serde(default, deserialize_with = "super::lenient")]
    pub process_time: Option<f64>,
}
