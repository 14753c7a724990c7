//! API response type definitions.

use serde::Deserialize;

/// Response from the batched users-by-usernames lookup.
#[derive(Debug, Deserialize)]
pub struct UsersByResponse {
    #[serde(default)]
    pub data: Option<Vec<UserInfo>>,
}

/// A resolved user identity.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub username: String,
}

/// One page of a user's tweet history.
#[derive(Debug, Deserialize)]
pub struct TweetsResponse {
    #[serde(default)]
    pub data: Vec<Tweet>,
    pub includes: Option<Includes>,
    #[serde(default)]
    pub meta: TweetsMeta,
}

/// A single tweet.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub attachments: Option<Attachments>,
}

/// Tweet attachments referencing the media expansion by key.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachments {
    #[serde(default)]
    pub media_keys: Vec<String>,
}

/// Expanded objects referenced by the page's tweets.
#[derive(Debug, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub media: Vec<Media>,
}

/// An expanded media object. The `url` field is only populated for photos.
#[derive(Debug, Clone, Deserialize)]
pub struct Media {
    pub media_key: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: Option<String>,
}

/// Pagination metadata carried by a tweets response.
///
/// `oldest_id` is the authoritative boundary for the next page request;
/// its absence signals the end of the user's history.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TweetsMeta {
    #[serde(default)]
    pub result_count: u64,
    pub newest_id: Option<String>,
    pub oldest_id: Option<String>,
}

impl TweetsResponse {
    /// Direct-download image URLs carried by this page's media expansion.
    ///
    /// A page without an `includes` section (e.g. all-text tweets) yields an
    /// empty list, not an error.
    pub fn image_urls(&self) -> Vec<String> {
        self.includes
            .as_ref()
            .map(|inc| inc.media.iter().filter_map(|m| m.url.clone()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_lookup() {
        let json = r#"{"data":[{"id":"123","name":"Alice","username":"alice"}]}"#;
        let parsed: UsersByResponse = serde_json::from_str(json).unwrap();
        let users = parsed.data.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "123");
        assert_eq!(users[0].username, "alice");
    }

    #[test]
    fn test_parse_user_lookup_unknown_handle() {
        // The API reports unknown handles via an errors array and no data.
        let json = r#"{"errors":[{"detail":"Could not find user"}]}"#;
        let parsed: UsersByResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.data.is_none());
    }

    #[test]
    fn test_image_urls_from_expansion() {
        let json = r#"{
            "data": [{"id": "1", "text": "pic", "attachments": {"media_keys": ["3_1"]}}],
            "includes": {"media": [
                {"media_key": "3_1", "type": "photo", "url": "https://pbs.twimg.com/media/a.jpg"},
                {"media_key": "7_2", "type": "video"}
            ]},
            "meta": {"result_count": 1, "oldest_id": "1"}
        }"#;
        let page: TweetsResponse = serde_json::from_str(json).unwrap();
        // Entries without a url (videos) are not downloadable and are skipped.
        assert_eq!(page.image_urls(), vec!["https://pbs.twimg.com/media/a.jpg"]);
    }

    #[test]
    fn test_image_urls_without_includes() {
        let json = r#"{
            "data": [{"id": "5", "text": "no media here"}],
            "meta": {"result_count": 1, "oldest_id": "5"}
        }"#;
        let page: TweetsResponse = serde_json::from_str(json).unwrap();
        assert!(page.image_urls().is_empty());
        assert_eq!(page.meta.oldest_id.as_deref(), Some("5"));
    }

    #[test]
    fn test_meta_without_oldest_id() {
        let json = r#"{"meta": {"result_count": 0}}"#;
        let page: TweetsResponse = serde_json::from_str(json).unwrap();
        assert!(page.data.is_empty());
        assert!(page.meta.oldest_id.is_none());
    }
}
