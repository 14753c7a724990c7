//! Image size variant selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image size variants offered by the Twitter image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// Large rendition (default).
    #[default]
    Large,
    /// Medium rendition.
    Medium,
    /// Small rendition.
    Small,
    /// Original upload.
    Orig,
    /// Thumbnail.
    Thumb,
}

impl ImageSize {
    /// Map a single-letter prompt code to a variant.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "l" => Some(ImageSize::Large),
            "m" => Some(ImageSize::Medium),
            "s" => Some(ImageSize::Small),
            "o" => Some(ImageSize::Orig),
            "t" => Some(ImageSize::Thumb),
            _ => None,
        }
    }

    /// Value of the CDN `name` query parameter selecting this variant.
    pub fn query_value(&self) -> &'static str {
        match self {
            ImageSize::Large => "large",
            ImageSize::Medium => "medium",
            ImageSize::Small => "small",
            ImageSize::Orig => "orig",
            ImageSize::Thumb => "thumb",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_value())
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "large" => Ok(ImageSize::Large),
            "medium" => Ok(ImageSize::Medium),
            "small" => Ok(ImageSize::Small),
            "orig" => Ok(ImageSize::Orig),
            "thumb" => Ok(ImageSize::Thumb),
            other => Err(format!("Unknown image size: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(ImageSize::from_code("l"), Some(ImageSize::Large));
        assert_eq!(ImageSize::from_code("m"), Some(ImageSize::Medium));
        assert_eq!(ImageSize::from_code("s"), Some(ImageSize::Small));
        assert_eq!(ImageSize::from_code("o"), Some(ImageSize::Orig));
        assert_eq!(ImageSize::from_code("t"), Some(ImageSize::Thumb));
        assert_eq!(ImageSize::from_code("x"), None);
        assert_eq!(ImageSize::from_code(""), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("large".parse::<ImageSize>().unwrap(), ImageSize::Large);
        assert_eq!("ORIG".parse::<ImageSize>().unwrap(), ImageSize::Orig);
        assert!("huge".parse::<ImageSize>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for size in [
            ImageSize::Large,
            ImageSize::Medium,
            ImageSize::Small,
            ImageSize::Orig,
            ImageSize::Thumb,
        ] {
            assert_eq!(size.to_string().parse::<ImageSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_default_is_large() {
        assert_eq!(ImageSize::default(), ImageSize::Large);
    }
}
