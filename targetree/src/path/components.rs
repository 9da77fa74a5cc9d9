//! Decomposition of a target into the names below its boundary.

use crate::path::syntax::{PathSyntax, Volume};
use crate::path::types::Components;

/// Split `target` into the ordered names between its boundary and itself.
///
/// The path is cleaned first, so `.` segments and cancelled `..` never show
/// up. A drive letter becomes the first name (one virtual component); a UNC
/// host and share become the first two (two virtual components). Leading
/// `..` segments of a relative path are dropped unless
/// `keep_leading_ascension` is set.
///
/// # Examples
///
/// ```
/// use targetree::path::{path_components, PosixSyntax};
///
/// let components = path_components(&PosixSyntax, "../foo/work", false);
/// assert_eq!(components.names(), ["foo", "work"]);
///
/// let components = path_components(&PosixSyntax, "../foo/work", true);
/// assert_eq!(components.names(), ["..", "foo", "work"]);
/// assert_eq!(components.virtual_count(), 0);
/// ```
#[must_use]
pub fn path_components(
    syntax: &dyn PathSyntax,
    target: &str,
    keep_leading_ascension: bool,
) -> Components {
    let cleaned = syntax.clean(target);
    let (volume, rest) = syntax.split_volume(&cleaned);

    let mut names = Vec::new();
    let virtual_count = match volume {
        Some(Volume::Drive(letter)) => {
            names.push(letter.to_string());
            1
        }
        Some(Volume::Unc { host, share }) => {
            names.push(host);
            names.push(share);
            2
        }
        None => 0,
    };

    for segment in rest.split(|c: char| syntax.is_separator(c)) {
        match segment {
            "" | "." => {}
            ".." if !keep_leading_ascension => {}
            name => names.push(name.to_string()),
        }
    }

    Components::new(names, virtual_count)
}
