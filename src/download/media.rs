//! Media file downloading.

use std::path::Path;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::TwitterApi;
use crate::config::{Config, ImageSize};
use crate::download::state::DownloadState;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, filename_from_url};
use crate::output::create_download_bar;

/// Outcome of downloading one batch of media URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every URL was handled; pagination may continue.
    Continue,
    /// An already-downloaded file was encountered in non-complete mode.
    StopBatch,
}

/// What to do with a single URL, given the local directory contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileAction {
    Download,
    Skip,
    Stop,
}

fn plan_file(target_dir: &Path, filename: &str, complete: bool) -> FileAction {
    if target_dir.join(filename).is_file() {
        if complete {
            FileAction::Skip
        } else {
            FileAction::Stop
        }
    } else {
        FileAction::Download
    }
}

/// Append the CDN size-variant selector to a media URL.
fn size_url(url: &str, size: ImageSize) -> String {
    format!("{}?name={}", url, size.query_value())
}

/// Download a batch of media URLs into the user's directory.
///
/// URLs are processed in order. An already-present file either stops the
/// batch (default) or is skipped individually (complete mode). Transferred
/// bytes and file counts accumulate into `state`.
pub async fn download_media_batch(
    api: &TwitterApi,
    config: &Config,
    state: &mut DownloadState,
    urls: &[String],
) -> Result<BatchOutcome> {
    let target_dir = state.base_path()?.to_path_buf();

    ensure_dir(&config.options.download_directory)?;
    ensure_dir(&target_dir)?;

    for url in urls {
        let filename = filename_from_url(url)?;

        match plan_file(&target_dir, &filename, config.options.complete) {
            FileAction::Stop => {
                if config.options.show_skipped_downloads {
                    tracing::info!("Already downloaded {}, stopping", filename);
                }
                state.stopped_early = true;
                return Ok(BatchOutcome::StopBatch);
            }
            FileAction::Skip => {
                state.increment_skipped();
                if config.options.show_skipped_downloads {
                    tracing::debug!("Skipping existing file: {}", filename);
                }
            }
            FileAction::Download => {
                let bytes =
                    download_direct(api, config, url, &target_dir.join(&filename)).await?;
                state.add_download(bytes);
            }
        }
    }

    Ok(BatchOutcome::Continue)
}

/// Stream one file to disk, returning the transferred byte count.
async fn download_direct(
    api: &TwitterApi,
    config: &Config,
    url: &str,
    output_path: &Path,
) -> Result<u64> {
    if config.options.show_downloads {
        tracing::info!("Downloading {}", url);
    }

    let response = api
        .download_file(&size_url(url, config.options.image_size))
        .await?;

    let content_length = response.content_length();

    // Create progress bar if needed
    let progress = if config.options.show_downloads {
        Some(create_download_bar(content_length.unwrap_or(0)))
    } else {
        None
    };

    // Stream to file
    let mut file = File::create(output_path).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_file_missing_downloads() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(
            plan_file(tmp.path(), "a.jpg", false),
            FileAction::Download
        );
        assert_eq!(plan_file(tmp.path(), "a.jpg", true), FileAction::Download);
    }

    #[test]
    fn test_plan_file_existing_stops_by_default() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.jpg"), b"data").unwrap();

        assert_eq!(plan_file(tmp.path(), "a.jpg", false), FileAction::Stop);
    }

    #[test]
    fn test_plan_file_existing_skips_in_complete_mode() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.jpg"), b"data").unwrap();

        assert_eq!(plan_file(tmp.path(), "a.jpg", true), FileAction::Skip);
    }

    #[test]
    fn test_size_url() {
        assert_eq!(
            size_url("https://pbs.twimg.com/media/a.jpg", ImageSize::Orig),
            "https://pbs.twimg.com/media/a.jpg?name=orig"
        );
        assert_eq!(
            size_url("https://pbs.twimg.com/media/a.jpg", ImageSize::Large),
            "https://pbs.twimg.com/media/a.jpg?name=large"
        );
    }
}
