//! Timeline walking and per-page download dispatch.

use crate::api::{Timeline, TwitterApi};
use crate::config::Config;
use crate::download::media::{download_media_batch, BatchOutcome};
use crate::download::state::DownloadState;
use crate::error::Result;

/// Walk a user's timeline and download every attached image.
///
/// Pagination runs until the API reports the end of history, or until the
/// downloader hits an already-downloaded file in non-complete mode.
pub async fn download_user_media(
    api: &TwitterApi,
    config: &Config,
    state: &mut DownloadState,
) -> Result<()> {
    let user_id = state.user_id()?.to_string();
    let mut timeline = Timeline::new(api, user_id);

    tracing::info!(
        "Downloading media for {}...",
        state.username.as_deref().unwrap_or("unknown")
    );

    while let Some(page) = timeline.next_page().await? {
        let urls = page.image_urls();

        // All-text page, keep paginating
        if urls.is_empty() {
            continue;
        }

        match download_media_batch(api, config, state, &urls).await? {
            BatchOutcome::StopBatch => {
                tracing::info!("Reached previously downloaded content, stopping");
                break;
            }
            BatchOutcome::Continue => {}
        }
    }

    tracing::info!(
        "Download complete: {} files ({:.2} MB)",
        state.file_count,
        state.total_megabytes()
    );

    Ok(())
}
