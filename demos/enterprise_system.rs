//! Prints the state of a dedicated enterprise server and optionally clears its queue.
//!
//! Usage:
//! `cargo run --example enterprise_system [-- --clear-queue]`

use std::env;

use modelslab::ModelsLab;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let sdk = ModelsLab::enterprise(None)?;
    let images = sdk.community().base();

    println!("Querying system details...");
    match images.system_details().await {
        Ok(details) => println!("{}", details),
        Err(e) => eprintln!("Error: {}", e),
    }

    if env::args().any(|arg| arg == "--clear-queue") {
        let response = images.clear_queue().await?;
        println!("Queue cleared: {}", response.message.unwrap_or_default());
    }

    Ok(())
}
