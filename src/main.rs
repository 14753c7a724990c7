//! Twitter Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use console::Term;
use tracing_subscriber::{fmt, EnvFilter};

use twitter_downloader::{
    api::TwitterApi,
    cli::{prompt_size, prompt_username, Args},
    config::{validate_config, Config},
    download::{download_user_media, DownloadState, GlobalState},
    error::{exit_codes, Error, Result},
    fs::get_user_folder,
    output::{
        print_banner, print_config_summary, print_error, print_global_stats, print_info,
        print_user_stats, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Authentication(_) | Error::Api(_) | Error::UserNotFound(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
                Error::UsersFailed(_) => ExitCode::from(exit_codes::SOME_USERS_FAILED as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    let size_given = args.size.is_some();
    args.merge_into_config(&mut config);

    // Prompt interactively when no user was configured
    if config.targeted_user.usernames.is_empty() {
        let term = Term::stdout();
        let username = prompt_username(&term)?;
        config.targeted_user.usernames.push(username);

        if !size_given {
            config.options.image_size = prompt_size(&term)?;
        }
    }

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    let users: Vec<String> = config.targeted_user.usernames.clone();
    print_config_summary(
        &users,
        &config.options.image_size.to_string(),
        config.options.complete,
        &config.options.download_directory.display().to_string(),
    );

    // Initialize API client
    let api = TwitterApi::new(config.my_account.bearer_token.clone())?;

    // Initialize global state
    let mut global_state = GlobalState::default();

    // Process each user
    for username in &users {
        print_info(&format!("Processing user: {}", username));

        match process_user(&api, &config, username).await {
            Ok(state) => {
                print_user_stats(&state);
                global_state.add_user_stats(&state);
            }
            Err(e) => {
                print_error(&format!("Failed to process {}: {}", username, e));
                global_state.mark_user_failed();
            }
        }
    }

    // Print global statistics
    print_global_stats(&global_state);

    if global_state.users_failed > 0 {
        return Err(Error::UsersFailed(global_state.users_failed));
    }

    Ok(())
}

/// Process a single user.
async fn process_user(api: &TwitterApi, config: &Config, username: &str) -> Result<DownloadState> {
    // Resolve the handle to its stable numeric identity
    let user = api.resolve_user(username.trim_start_matches('@')).await?;

    // Initialize download state
    let mut state = DownloadState::new(user.username.clone(), user.id.clone());
    state.base_path = Some(get_user_folder(config, &user.username));

    // Walk the timeline
    download_user_media(api, config, &mut state).await?;

    Ok(state)
}
