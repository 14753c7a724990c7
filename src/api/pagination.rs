//! Cursor-based timeline pagination.

use crate::api::client::TwitterApi;
use crate::api::types::TweetsResponse;
use crate::error::Result;

/// Walks a user's tweet history backward in time.
///
/// Each fetched page moves the cursor to the response's `meta.oldest_id`, so
/// successive requests are bounded to strictly older tweets.
pub struct Timeline<'a> {
    api: &'a TwitterApi,
    user_id: String,
    cursor: Option<String>,
}

impl<'a> Timeline<'a> {
    /// Create a paginator for a resolved user, starting from the newest tweet.
    pub fn new(api: &'a TwitterApi, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            cursor: None,
        }
    }

    /// The current cursor, once a page has been fetched.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Fetch the next page of tweets, or `None` once history is exhausted.
    ///
    /// A response whose `meta` carries no `oldest_id` signals the end of
    /// history; such a page is not returned to the caller.
    pub async fn next_page(&mut self) -> Result<Option<TweetsResponse>> {
        let page = self
            .api
            .user_tweets(&self.user_id, self.cursor.as_deref())
            .await?;

        match page.meta.oldest_id.clone() {
            Some(oldest_id) => {
                self.cursor = Some(oldest_id);
                Ok(Some(page))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_starts_without_cursor() {
        let api = TwitterApi::new("token".to_string()).unwrap();
        let timeline = Timeline::new(&api, "123");
        assert!(timeline.cursor().is_none());
    }
}
