//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Twitter Downloader                                ║
║     Image archiver for Twitter timelines              ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(users: &[String], size: &str, complete: bool, download_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Users:     {}", users.join(", "));
    println!("  Size:      {}", size);
    println!(
        "  Mode:      {}",
        if complete {
            "complete (skip duplicates)"
        } else {
            "incremental (stop at first duplicate)"
        }
    );
    println!("  Directory: {}", download_dir);
    println!();
}
