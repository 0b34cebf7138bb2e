//! Helpers for moving local files in and out of base64 payloads.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::ModelsLabError;

/// Reads a file and returns its content as standard base64.
pub async fn file_to_base64<P: AsRef<Path>>(path: P) -> Result<String, ModelsLabError> {
    let bytes = fs::read(path.as_ref()).await?;
    Ok(STANDARD.encode(bytes))
}

/// Decodes standard base64 and writes the bytes to `output_path`, creating
/// parent directories as needed.
///
/// Inline results from the API (`base64: true` requests) can be saved with this.
pub async fn base64_to_file<P: AsRef<Path>>(data: &str, output_path: P) -> Result<(), ModelsLabError> {
    let bytes = STANDARD.decode(data.trim())?;
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(output_path).await?;
    file.write_all(&bytes).await?;
    file.flush().await?;
    Ok(())
}
