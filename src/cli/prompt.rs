//! Interactive prompts for values missing from config and CLI.

use console::Term;

use crate::config::ImageSize;
use crate::error::Result;
use crate::output::print_warning;

/// Prompt for a username on the given terminal.
pub fn prompt_username(term: &Term) -> Result<String> {
    term.write_str("Input username: ")?;
    let line = term.read_line()?;
    Ok(line.trim().trim_start_matches('@').to_string())
}

/// Prompt for an image size by single-letter code.
///
/// Unrecognized input falls back to `large` with a warning.
pub fn prompt_size(term: &Term) -> Result<ImageSize> {
    term.write_line("Download image size:")?;
    term.write_line("  - [l]arge")?;
    term.write_line("  - [m]edium")?;
    term.write_line("  - [s]mall")?;
    term.write_line("  - [o]rig")?;
    term.write_line("  - [t]humb")?;

    let input = term.read_line()?.trim().to_lowercase();

    if let Some(size) = ImageSize::from_code(&input) {
        return Ok(size);
    }
    if let Ok(size) = input.parse::<ImageSize>() {
        return Ok(size);
    }

    print_warning("Invalid size, using 'large' instead.");
    Ok(ImageSize::Large)
}
