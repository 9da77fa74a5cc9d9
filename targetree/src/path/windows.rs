//! Windows path rules.
//!
//! Both `\` and `/` separate components; `\` is canonical. Two kinds of
//! volume prefix are recognised: a drive letter (`c:`) and a UNC share
//! (`\\host\share`). A drive path is absolute only when a separator follows
//! the colon; `c:foo` is relative to the drive's current directory. A UNC
//! share is always absolute.

use crate::path::syntax::{PathSyntax, Volume};

/// Windows path rules, usable on any host.
///
/// # Examples
///
/// ```
/// use targetree::path::{PathSyntax, Volume, WindowsSyntax};
///
/// assert!(WindowsSyntax.is_absolute(r"c:\users"));
/// assert!(!WindowsSyntax.is_absolute("c:users"));
///
/// let (volume, rest) = WindowsSyntax.split_volume(r"\\nas\backup\photos");
/// assert_eq!(
///     volume,
///     Some(Volume::Unc { host: "nas".to_string(), share: "backup".to_string() })
/// );
/// assert_eq!(rest, r"\photos");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowsSyntax;

fn is_slash(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Length in bytes of a UNC prefix `\\host\share`, if `path` starts with one.
fn unc_prefix(path: &str) -> Option<(usize, &str, &str)> {
    let mut chars = path.chars();
    if !(chars.next().is_some_and(is_slash) && chars.next().is_some_and(is_slash)) {
        return None;
    }

    let after = &path[2..];
    let host_end = after.find(is_slash)?;
    let host = &after[..host_end];
    if host.is_empty() {
        return None;
    }

    let share_start = host_end + 1;
    let share_len = after[share_start..]
        .find(is_slash)
        .unwrap_or(after.len() - share_start);
    let share = &after[share_start..share_start + share_len];
    if share.is_empty() {
        return None;
    }

    Some((2 + share_start + share_len, host, share))
}

impl PathSyntax for WindowsSyntax {
    fn separator(&self) -> char {
        '\\'
    }

    fn is_separator(&self, c: char) -> bool {
        is_slash(c)
    }

    fn split_volume<'a>(&self, path: &'a str) -> (Option<Volume>, &'a str) {
        let bytes = path.as_bytes();
        if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
            return (Some(Volume::Drive(char::from(bytes[0]))), &path[2..]);
        }

        if let Some((len, host, share)) = unc_prefix(path) {
            let volume = Volume::Unc {
                host: host.to_string(),
                share: share.to_string(),
            };
            return (Some(volume), &path[len..]);
        }

        (None, path)
    }

    fn is_absolute(&self, path: &str) -> bool {
        match self.split_volume(path) {
            (Some(Volume::Unc { .. }), _) => true,
            (Some(Volume::Drive(_)), rest) => rest.starts_with(is_slash),
            (None, _) => false,
        }
    }
}
