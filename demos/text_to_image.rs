//! Generates an image from a prompt with a community model and waits for it.
//!
//! To run this example, you must have the `MODELSLAB_API_KEY` environment variable set.
//!
//! Usage:
//! `cargo run --example text_to_image -- "a lighthouse at dusk"`

use std::env;

use modelslab::types::community::TextToImageRequest;
use modelslab::ModelsLab;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let prompt = env::args()
        .nth(1)
        .unwrap_or_else(|| "a lighthouse at dusk, oil painting".to_string());

    let sdk = ModelsLab::new(None)?;

    let mut request = TextToImageRequest::new(prompt);
    request.options.model_id = Some("flux".into());
    request.options.width = Some(1024);
    request.options.height = Some(1024);
    request.options.samples = Some(1);

    println!("Submitting text2img request...");
    let response = sdk.community().text_to_image(&request).await?;

    if response.base.is_success() {
        for url in response.images.unwrap_or_default() {
            println!("Image ready: {}", url);
        }
        return Ok(());
    }

    let id = response
        .base
        .job_id()
        .ok_or_else(|| anyhow::anyhow!("API returned {:?} without a job id", response.base.status))?;
    println!("Job `{}` is {:?}, polling...", id, response.base.status);

    let ready = sdk.community().fetch(&id).await?;
    println!("Result: {}", ready);

    Ok(())
}
