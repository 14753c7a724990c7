//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, ImageSize};

/// Twitter media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "twitter-downloader",
    version,
    about = "Download image media from Twitter users",
    long_about = "A CLI tool to download the images attached to a Twitter user's tweets.\n\n\
                  Walks the user's timeline backward in time and stops at the first\n\
                  already-downloaded file unless --complete is given."
)]
pub struct Args {
    /// Username(s) to download from.
    /// Can specify multiple users separated by spaces.
    #[arg(short, long, value_delimiter = ' ', num_args = 1..)]
    pub user: Option<Vec<String>>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Twitter API bearer token.
    #[arg(short, long, env = "BEARER_TOKEN")]
    pub token: Option<String>,

    /// Image size variant to download.
    #[arg(short, long, value_enum)]
    pub size: Option<ImageSizeArg>,

    /// Skip duplicates individually instead of stopping the run at the
    /// first already-downloaded file.
    #[arg(long)]
    pub complete: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Show information about skipped downloads.
    #[arg(long)]
    pub show_skipped: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI image size argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ImageSizeArg {
    /// Large rendition.
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

impl From<ImageSizeArg> for ImageSize {
    fn from(arg: ImageSizeArg) -> Self {
        match arg {
            ImageSizeArg::Large => ImageSize::Large,
            ImageSizeArg::Medium => ImageSize::Medium,
            ImageSizeArg::Small => ImageSize::Small,
            ImageSizeArg::Orig => ImageSize::Orig,
            ImageSizeArg::Thumb => ImageSize::Thumb,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        // Override usernames if provided
        if let Some(users) = self.user {
            config.targeted_user.usernames = users;
        }

        // Override account settings if provided
        if let Some(token) = self.token {
            config.my_account.bearer_token = token;
        }

        // Override options if provided
        if let Some(dir) = self.download_directory {
            config.options.download_directory = dir;
        }

        if let Some(size) = self.size {
            config.options.image_size = size.into();
        }

        // Boolean flags (only override if set to non-default)
        if self.complete {
            config.options.complete = true;
        }

        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped_downloads = false;
        }

        if self.show_skipped {
            config.options.show_skipped_downloads = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_defaults() -> Args {
        Args {
            user: None,
            download_directory: None,
            token: None,
            size: None,
            complete: false,
            config: PathBuf::from("config.toml"),
            quiet: false,
            show_skipped: false,
            debug: false,
        }
    }

    #[test]
    fn test_merge_overrides_config() {
        let mut config = Config::default();
        config.targeted_user.usernames = vec!["from_file".to_string()];

        let mut args = args_with_defaults();
        args.user = Some(vec!["from_cli".to_string()]);
        args.size = Some(ImageSizeArg::Orig);
        args.complete = true;

        args.merge_into_config(&mut config);

        assert_eq!(config.targeted_user.usernames, vec!["from_cli"]);
        assert_eq!(config.options.image_size, ImageSize::Orig);
        assert!(config.options.complete);
    }

    #[test]
    fn test_merge_keeps_config_values() {
        let mut config = Config::default();
        config.my_account.bearer_token = "file_token".to_string();
        config.options.complete = true;

        args_with_defaults().merge_into_config(&mut config);

        assert_eq!(config.my_account.bearer_token, "file_token");
        assert!(config.options.complete);
    }

    #[test]
    fn test_quiet_disables_output() {
        let mut config = Config::default();

        let mut args = args_with_defaults();
        args.quiet = true;
        args.merge_into_config(&mut config);

        assert!(!config.options.show_downloads);
        assert!(!config.options.show_skipped_downloads);
    }
}
