//! Twitter API HTTP client.

use reqwest::{header, Client, Response};

use crate::api::types::*;
use crate::error::{Error, Result};

/// Twitter API base URL.
const API_BASE: &str = "https://api.twitter.com";

/// Maximum tweets per timeline page request.
pub const PAGE_SIZE: usize = 100;

/// Twitter API client holding the injected bearer credential.
pub struct TwitterApi {
    client: Client,
    token: String,
}

impl TwitterApi {
    /// Create a new API client from a bearer token.
    pub fn new(token: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, token })
    }

    /// Make an authenticated GET request against the API.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{}", API_BASE, path);

        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.token)
                    .parse::<header::HeaderValue>()
                    .map_err(|e| Error::Authentication(format!("Invalid bearer token: {}", e)))?,
            )
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        // Check for auth errors
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Auth error response: {}", body);
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() {
                    "Authentication failed"
                } else {
                    &body
                }
            )));
        }

        Ok(response)
    }

    /// Resolve a username to its stable user identity.
    pub async fn resolve_user(&self, username: &str) -> Result<UserInfo> {
        let response = self
            .get("/2/users/by", &[("usernames", username.to_string())])
            .await?;
        let text = response.text().await?;
        tracing::debug!("User lookup response: {}", text);

        let api_response: UsersByResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse user lookup: {} - Response: {}",
                e, text
            ))
        })?;

        // No data entry means the handle does not exist
        api_response
            .data
            .and_then(|users| users.into_iter().next())
            .ok_or_else(|| Error::UserNotFound(username.to_string()))
    }

    /// Get one page of a user's tweets, bounded to items older than
    /// `until_id` when a cursor is held.
    pub async fn user_tweets(
        &self,
        user_id: &str,
        until_id: Option<&str>,
    ) -> Result<TweetsResponse> {
        let path = format!("/2/users/{}/tweets", user_id);
        let mut query = vec![
            ("exclude", "retweets".to_string()),
            ("expansions", "attachments.media_keys".to_string()),
            ("max_results", PAGE_SIZE.to_string()),
            ("media.fields", "url".to_string()),
        ];
        if let Some(cursor) = until_id {
            query.push(("until_id", cursor.to_string()));
        }

        let response = self.get(&path, &query).await?;
        let text = response.text().await?;
        tracing::debug!("Tweets response: {}", text);

        let page: TweetsResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse tweets: {} - Response: {}",
                e, text
            ))
        })?;

        Ok(page)
    }

    /// Download a file from a URL (streaming).
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}
