//! Remote document staging
//!
//! A remote document is fetched into the scratch directory first and only
//! then handed to the gateway, so the HTTP download and the outbound upload
//! never hold interdependent streams.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use url::Url;
use uuid::Uuid;

use crate::core::config;
use crate::core::error::{AppError, AppResult};

/// Builds the HTTP client used for document downloads
pub fn build_client() -> AppResult<Client> {
    build_client_with_idle_timeout(config::network::fetch_timeout())
}

/// Client whose connect and per-read waits are bounded by `idle_timeout`.
///
/// There is no cap on the total request time: a large document on a slow
/// link is fine as long as bytes keep arriving.
pub fn build_client_with_idle_timeout(idle_timeout: Duration) -> AppResult<Client> {
    Ok(Client::builder()
        .user_agent(concat!("tutorbot/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(idle_timeout)
        .read_timeout(idle_timeout)
        .build()?)
}

/// Last non-empty segment of the URL path, percent-decoded and made safe to
/// use as a single path component
pub fn filename_from_url(url: &Url) -> Option<String> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|s| !s.is_empty())
        .map(|s| urlencoding::decode(s).map(|d| d.into_owned()).unwrap_or_else(|_| s.to_string()))
        .map(|s| escape_filename(&s))
        .filter(|s| !s.is_empty() && s != "." && s != "..")
}

/// Replaces path separators so a name cannot escape its directory
fn escape_filename(filename: &str) -> String {
    filename.replace(['/', '\\'], "_")
}

/// `<millis>_<unique>_<file_name>`; the random part keeps two deliveries of
/// the same document in the same millisecond apart
fn scratch_name(file_name: &str) -> String {
    let unique = Uuid::new_v4().simple().to_string();
    format!("{}_{}_{}", Utc::now().timestamp_millis(), &unique[..8], file_name)
}

/// Downloads `url` into `scratch_dir` and returns the path of the complete
/// file.
///
/// The file is flushed and synced before this returns. On any failure the
/// partially written file is removed.
pub async fn download_to_scratch(client: &Client, url: &Url, scratch_dir: &Path, file_name: &str) -> AppResult<PathBuf> {
    log::info!("Fetching remote document: {}", url);

    let response = client.get(url.clone()).send().await?;
    if !response.status().is_success() {
        return Err(AppError::HttpStatus(response.status()));
    }

    fs_err::tokio::create_dir_all(scratch_dir).await?;
    let temp_path = scratch_dir.join(scratch_name(file_name));

    match write_stream(response, &temp_path).await {
        Ok(written) => {
            log::info!("Staged {} bytes at {}", written, temp_path.display());
            Ok(temp_path)
        }
        Err(e) => {
            remove_best_effort(&temp_path).await;
            Err(e)
        }
    }
}

async fn write_stream(response: reqwest::Response, path: &Path) -> AppResult<u64> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    file.sync_all().await?;
    Ok(written)
}

/// Deletes a staged file; failures are only logged
pub async fn remove_best_effort(path: &Path) {
    if let Err(e) = fs_err::tokio::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            log::warn!("Failed to remove staged file: {}", e);
        }
    }
}
