//! Polls an existing job until it is ready, with Ctrl-C to stop waiting.
//!
//! Usage:
//! `cargo run --example fetch_result -- <DOMAIN> <JOB_ID>`
//!
//! `DOMAIN` is one of audio, video, community, deepfake, image_editing,
//! interior, realtime or 3d.

use std::env;
use std::time::Duration;

use modelslab::{BaseApi, CancellationToken, ClientConfig, ModelsLab};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modelslab=debug".into()),
        )
        .init();

    let mut args = env::args().skip(1);
    let (domain, id) = match (args.next(), args.next()) {
        (Some(domain), Some(id)) => (domain, id),
        _ => anyhow::bail!("Usage: fetch_result <DOMAIN> <JOB_ID>"),
    };

    let config = ClientConfig::default()
        .with_fetch_retry(30)
        .with_fetch_delay(Duration::from_secs(5));
    let sdk = ModelsLab::with_config(config)?;

    let base: &BaseApi = match domain.as_str() {
        "audio" => sdk.audio().base(),
        "video" => sdk.video().base(),
        "community" => sdk.community().base(),
        "deepfake" => sdk.deepfake().base(),
        "image_editing" => sdk.image_editing().base(),
        "interior" => sdk.interior().base(),
        "realtime" => sdk.realtime().base(),
        "3d" => sdk.three_d().base(),
        other => anyhow::bail!("Unknown domain `{}`", other),
    };

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    println!("Waiting for `{}` at {}fetch/{}", id, base.base_url(), id);
    match base.fetch_with_cancel(&id, &cancel).await {
        Ok(response) => println!("{}", serde_json::to_string_pretty(&response.to_value())?),
        Err(e) if e.is_canceled() => println!("Stopped waiting."),
        Err(e) => eprintln!("Error waiting for job: {}", e),
    }

    Ok(())
}
