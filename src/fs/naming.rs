//! Filename derivation and sanitization.

use url::Url;

use crate::error::{Error, Result};

/// Derive a local filename from a media URL's final path segment.
pub fn filename_from_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)?;
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::InvalidFilename(format!("URL has no file segment: '{}'", raw)))?;

    sanitize_filename(segment)
}

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    // Also reject if it contains path separators (should be sanitized, not allowed)
    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    // Sanitize remaining problematic characters
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject empty or whitespace-only names
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://pbs.twimg.com/media/abc123.jpg").unwrap(),
            "abc123.jpg"
        );
        assert_eq!(
            filename_from_url("https://example.com/a/b/c/photo.png").unwrap(),
            "photo.png"
        );
    }

    #[test]
    fn test_filename_from_url_ignores_query() {
        assert_eq!(
            filename_from_url("https://pbs.twimg.com/media/abc.jpg?name=large").unwrap(),
            "abc.jpg"
        );
    }

    #[test]
    fn test_filename_from_url_no_segment() {
        assert!(filename_from_url("https://example.com/").is_err());
        assert!(filename_from_url("not a url").is_err());
    }

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("normal.txt").unwrap(), "normal.txt");
        assert_eq!(sanitize_filename("file:name.txt").unwrap(), "file_name.txt");
        assert_eq!(
            sanitize_filename("file*with?special.txt").unwrap(),
            "file_with_special.txt"
        );
    }

    #[test]
    fn test_sanitize_filename_path_traversal() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("..\\windows\\system32").is_err());
        assert!(sanitize_filename("foo/../bar").is_err());
    }

    #[test]
    fn test_sanitize_filename_path_separators() {
        assert!(sanitize_filename("path/to/file.txt").is_err());
        assert!(sanitize_filename("path\\to\\file.txt").is_err());
    }

    #[test]
    fn test_sanitize_filename_null_bytes() {
        assert!(sanitize_filename("file\0name.txt").is_err());
    }

    #[test]
    fn test_sanitize_filename_empty() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
    }
}
