//! An unofficial Rust SDK for the ModelsLab API.
//!
//! This SDK provides an asynchronous interface to the ModelsLab generative
//! media platform: images, video, audio, 3D meshes, face swaps and interior
//! design. It handles authentication, request validation, error
//! classification and polling of long-running jobs, allowing you to focus on
//! your application's core logic.
//!
//! ## Features
//! - One typed request and response per endpoint, validated before anything is sent.
//! - Standard (`v6`) and enterprise (`v1/enterprise`) endpoint prefixes.
//! - Polling with a bounded retry budget and cooperative cancellation.
//! - Typed error handling for robust applications.
//!
//! ```no_run
//! use modelslab::types::community::TextToImageRequest;
//! use modelslab::ModelsLab;
//!
//! # async fn run() -> Result<(), modelslab::ModelsLabError> {
//! let sdk = ModelsLab::new(None)?; // reads MODELSLAB_API_KEY
//! let image = sdk
//!     .community()
//!     .text_to_image(&TextToImageRequest::new("a lighthouse at dusk"))
//!     .await?;
//! if let Some(id) = image.base.job_id().filter(|_| !image.base.is_success()) {
//!     let ready = sdk.community().fetch(&id).await?;
//!     println!("{}", ready);
//! }
//! # Ok(())
//! # }
//! ```

pub mod apis;
pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;
pub mod validation;

pub use apis::{
    AudioApi, BaseApi, CommunityApi, DeepfakeApi, ImageEditingApi, InteriorApi, RealtimeApi,
    ThreeDApi, VideoApi,
};
pub use client::ModelsLabClient;
pub use config::ClientConfig;
pub use error::ModelsLabError;
pub use tokio_util::sync::CancellationToken;
pub use types::{ApiResponse, BaseResponse, BaseRequest, FileInput};
pub use validation::{FieldError, Validate, ValidationError};

/// Entry point bundling one shared client with every domain API.
///
/// All domain APIs share the same connection pool, credential and polling
/// budget. The struct is cheap to clone.
#[derive(Clone, Debug)]
pub struct ModelsLab {
    client: ModelsLabClient,
    enterprise: bool,
    audio: AudioApi,
    video: VideoApi,
    community: CommunityApi,
    deepfake: DeepfakeApi,
    image_editing: ImageEditingApi,
    interior: InteriorApi,
    realtime: RealtimeApi,
    three_d: ThreeDApi,
}

impl ModelsLab {
    /// Creates a standard-mode SDK with the default configuration.
    ///
    /// If `api_key` is `None`, the `MODELSLAB_API_KEY` environment variable is used.
    ///
    /// # Errors
    ///
    /// - `ModelsLabError::MissingApiKey` if the API key is not provided in either way.
    /// - `ModelsLabError::Transport` if the internal HTTP client fails to build.
    pub fn new(api_key: Option<String>) -> Result<Self, ModelsLabError> {
        Self::with_client(ModelsLabClient::new(api_key)?, false)
    }

    /// Like [`new`](Self::new), but every domain uses the enterprise prefix.
    pub fn enterprise(api_key: Option<String>) -> Result<Self, ModelsLabError> {
        Self::with_client(ModelsLabClient::new(api_key)?, true)
    }

    /// Creates a standard-mode SDK from a full configuration.
    ///
    /// # Errors
    ///
    /// See [`ModelsLabClient::with_config`].
    pub fn with_config(config: ClientConfig) -> Result<Self, ModelsLabError> {
        Self::with_client(ModelsLabClient::with_config(config)?, false)
    }

    pub fn enterprise_with_config(config: ClientConfig) -> Result<Self, ModelsLabError> {
        Self::with_client(ModelsLabClient::with_config(config)?, true)
    }

    /// Wraps an existing client. Every domain API gets a clone of it.
    pub fn with_client(client: ModelsLabClient, enterprise: bool) -> Result<Self, ModelsLabError> {
        Ok(Self {
            audio: AudioApi::new(client.clone(), enterprise)?,
            video: VideoApi::new(client.clone(), enterprise)?,
            community: CommunityApi::new(client.clone(), enterprise)?,
            deepfake: DeepfakeApi::new(client.clone(), enterprise)?,
            image_editing: ImageEditingApi::new(client.clone(), enterprise)?,
            interior: InteriorApi::new(client.clone(), enterprise)?,
            realtime: RealtimeApi::new(client.clone(), enterprise)?,
            three_d: ThreeDApi::new(client.clone(), enterprise)?,
            client,
            enterprise,
        })
    }

    pub fn client(&self) -> &ModelsLabClient {
        &self.client
    }

    pub fn is_enterprise(&self) -> bool {
        self.enterprise
    }

    pub fn audio(&self) -> &AudioApi {
        &self.audio
    }

    pub fn video(&self) -> &VideoApi {
        &self.video
    }

    pub fn community(&self) -> &CommunityApi {
        &self.community
    }

    pub fn deepfake(&self) -> &DeepfakeApi {
        &self.deepfake
    }

    pub fn image_editing(&self) -> &ImageEditingApi {
        &self.image_editing
    }

    pub fn interior(&self) -> &InteriorApi {
        &self.interior
    }

    pub fn realtime(&self) -> &RealtimeApi {
        &self.realtime
    }

    pub fn three_d(&self) -> &ThreeDApi {
        &self.three_d
    }
}
