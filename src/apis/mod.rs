//! One API struct per domain. Each wraps a [`BaseApi`] that owns the domain
//! prefix, the shared client and the enterprise maintenance operations.

mod audio;
mod base;
mod community;
mod deepfake;
mod image_editing;
mod interior;
mod realtime;
mod threed;
mod video;

pub use audio::AudioApi;
pub use base::BaseApi;
pub use community::CommunityApi;
pub use deepfake::DeepfakeApi;
pub use image_editing::ImageEditingApi;
pub use interior::InteriorApi;
pub use realtime::RealtimeApi;
pub use threed::ThreeDApi;
pub use video::VideoApi;
