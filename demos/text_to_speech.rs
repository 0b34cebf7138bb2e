//! Reads a sentence aloud and saves the inline audio next to the binary.
//!
//! Usage:
//! `cargo run --example text_to_speech -- "Hello from Rust"`

use std::env;

use modelslab::types::audio::TextToSpeechRequest;
use modelslab::{utils, ModelsLab};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let text = env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello from the ModelsLab Rust SDK.".to_string());

    let sdk = ModelsLab::new(None)?;
    let request = TextToSpeechRequest {
        voice_id: Some("madison".into()),
        language: Some("english".into()),
        output_format: Some("wav".into()),
        ..TextToSpeechRequest::new(text)
    };

    let response = sdk.audio().text_to_speech(&request).await?;

    match (response.audio_data, response.audio_url) {
        (Some(data), _) => {
            utils::base64_to_file(&data, "speech.wav").await?;
            println!("Saved speech.wav");
        }
        (None, Some(url)) => println!("Audio available at {}", url),
        (None, None) => match response.base.job_id() {
            Some(id) => println!("Job `{}` queued, run `fetch_result audio {}` later", id, id),
            None => eprintln!("Unexpected response: {:?}", response.base),
        },
    }

    Ok(())
}
