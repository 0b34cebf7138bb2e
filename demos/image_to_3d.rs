//! Turns a local image into a GLB mesh.
//!
//! Usage:
//! `cargo run --example image_to_3d -- <IMAGE_PATH>`

use std::env;

use modelslab::types::threed::ImageTo3DRequest;
use modelslab::{utils, FileInput, ModelsLab};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let image_path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Please provide an image path as a command-line argument."))?;

    let sdk = ModelsLab::new(None)?;

    let request = ImageTo3DRequest {
        output_format: Some("glb".into()),
        render: Some(false),
        ..ImageTo3DRequest::new(FileInput::read_base64(&image_path).await?)
    };

    println!("Uploading {} ...", image_path);
    let response = sdk.three_d().image_to_3d(&request).await?;

    let ready = if response.base.is_success() {
        response
    } else {
        let id = response
            .base
            .job_id()
            .ok_or_else(|| anyhow::anyhow!("No job id in response: {:?}", response.base))?;
        println!("Mesh is rendering, polling job `{}`...", id);
        sdk.three_d().fetch(&id).await?.decode()?
    };

    match (ready.model_data, ready.model_url) {
        (Some(data), _) => {
            utils::base64_to_file(&data, "model.glb").await?;
            println!("Mesh written to model.glb");
        }
        (None, Some(url)) => println!("Mesh available at {}", url),
        (None, None) => eprintln!("Finished without a mesh: {:?}", ready.base),
    }

    Ok(())
}
