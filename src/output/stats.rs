//! Statistics reporting.

use console::style;

use crate::download::{DownloadState, GlobalState};

/// Print statistics for a single user.
pub fn print_user_stats(state: &DownloadState) {
    let username = state.username.as_deref().unwrap_or("unknown");

    println!();
    println!(
        "{}",
        style(format!("Statistics for {}:", username)).bold()
    );
    println!("  Files:   {}", state.file_count);
    println!("  Size:    {:.2} MB", state.total_megabytes());
    println!("  Skipped: {} (duplicates)", state.skipped_count);
    if state.stopped_early {
        println!("  Stopped at previously downloaded content");
    }
}

/// Print global statistics across all users.
pub fn print_global_stats(state: &GlobalState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Users processed: {}", state.users_processed);
    if state.users_failed > 0 {
        println!("  Users failed:    {}", style(state.users_failed).red());
    }
    println!("  Files:   {}", state.file_count);
    println!("  Size:    {:.2} MB", state.total_megabytes());
    println!("  Skipped: {} (duplicates)", state.skipped_count);
    println!("{}", style("═".repeat(50)).dim());
}

/// Print a one-line run summary.
pub fn print_summary(files: u64, megabytes: f64, skipped: u64) {
    println!(
        "Finished downloading {} files ({:.2} MB, {} skipped)",
        style(files).green(),
        megabytes,
        style(skipped).yellow()
    );
}
