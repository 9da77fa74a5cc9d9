//! Reading target lists from files.
//!
//! A target file holds one target per line. Surrounding whitespace is
//! trimmed, and empty lines and lines starting with `#` are skipped. The
//! path `-` reads standard input.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Parse target lines from `text`.
///
/// # Examples
///
/// ```
/// use targetree::targets::parse_target_lines;
///
/// let text = "# home\n/home/user\n\n  ../shared  \n";
/// assert_eq!(parse_target_lines(text), ["/home/user", "../shared"]);
/// ```
#[must_use]
pub fn parse_target_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read targets from the file at `path`, or from standard input for `-`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the file cannot be read or is not valid
/// UTF-8, and [`Error::Io`] if standard input cannot be read.
pub fn read_targets_file(path: &Path) -> Result<Vec<String>> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read target file: {e}"),
        })?
    };

    let targets = parse_target_lines(&text);
    log::debug!("read {} target(s) from {}", targets.len(), path.display());
    Ok(targets)
}
