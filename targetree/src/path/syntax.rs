//! Path-syntax providers.
//!
//! A [`PathSyntax`] answers purely lexical questions about path strings:
//! which characters separate components, where a volume prefix ends, whether
//! a path is absolute, and what its cleaned form is. No provider ever touches
//! the filesystem, which is what lets the resolver handle Windows drive and
//! UNC paths on a Unix host (and the reverse) in tests.

use crate::path::types::Boundary;

/// A volume prefix recognised by a path syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Volume {
    /// A drive letter such as `c:`.
    Drive(char),
    /// A UNC share such as `\\host\share`.
    Unc {
        /// Server name.
        host: String,
        /// Share name on the server.
        share: String,
    },
}

/// Lexical path rules for one operating-system family.
///
/// Implementors provide the separator, volume detection and the absolute
/// check; cleaning, joining and boundary rendering are derived from those.
///
/// # Examples
///
/// ```
/// use targetree::path::{PathSyntax, PosixSyntax, WindowsSyntax};
///
/// assert_eq!(PosixSyntax.clean("foo/./bar/../baz"), "foo/baz");
/// assert_eq!(WindowsSyntax.clean("c:/foo/../bar"), r"c:\bar");
/// ```
pub trait PathSyntax {
    /// The canonical separator emitted by [`clean`](Self::clean).
    fn separator(&self) -> char;

    /// Whether `c` separates path components.
    fn is_separator(&self, c: char) -> bool;

    /// Split a leading volume prefix off `path`.
    ///
    /// Returns the parsed volume, if any, and the remainder of the path after
    /// the prefix.
    fn split_volume<'a>(&self, path: &'a str) -> (Option<Volume>, &'a str);

    /// Whether `path` is absolute under this syntax.
    fn is_absolute(&self, path: &str) -> bool;

    /// Lexically clean `path`.
    ///
    /// Repeated separators collapse to one, `.` segments disappear, and `..`
    /// cancels the preceding named segment. A `..` directly below a root is
    /// dropped. The result uses the canonical separator; an empty relative
    /// result becomes `.`.
    fn clean(&self, path: &str) -> String {
        let (volume, rest) = self.split_volume(path);
        let rooted = rest.starts_with(|c: char| self.is_separator(c))
            || matches!(volume, Some(Volume::Unc { .. }));
        let segments = collapse(rest.split(|c: char| self.is_separator(c)), rooted);

        let sep = self.separator();
        let mut out = match &volume {
            Some(Volume::Drive(letter)) => format!("{letter}:"),
            Some(Volume::Unc { host, share }) => format!("{sep}{sep}{host}{sep}{share}"),
            None => String::new(),
        };

        if rooted {
            out.push(sep);
        } else if segments.is_empty() {
            out.push('.');
        }
        out.push_str(&segments.join(sep.to_string().as_str()));
        out
    }

    /// Join `name` onto `base` and clean the result.
    ///
    /// A bare drive such as `c:` stays drive-relative: `c:` joined with
    /// `foo` is `c:foo`, not `c:\foo`.
    fn join(&self, base: &str, name: &str) -> String {
        match self.split_volume(base) {
            (Some(Volume::Drive(_)), "") => self.clean(&format!("{base}{name}")),
            _ => self.clean(&format!("{base}{}{name}", self.separator())),
        }
    }

    /// Split a path into its parent directory and final name.
    ///
    /// Returns `None` when the cleaned path has no final name of its own:
    /// `.`, a run of `..`, or a bare root.
    ///
    /// # Examples
    ///
    /// ```
    /// use targetree::path::{PathSyntax, PosixSyntax};
    ///
    /// assert_eq!(
    ///     PosixSyntax.parent_and_name("foo/bar"),
    ///     Some(("foo".to_string(), "bar".to_string()))
    /// );
    /// assert_eq!(
    ///     PosixSyntax.parent_and_name("foo"),
    ///     Some((".".to_string(), "foo".to_string()))
    /// );
    /// assert_eq!(PosixSyntax.parent_and_name("/"), None);
    /// ```
    fn parent_and_name(&self, path: &str) -> Option<(String, String)> {
        let cleaned = self.clean(path);
        let (_, rest) = self.split_volume(&cleaned);
        let volume_len = cleaned.len() - rest.len();

        let (parent_rest, name) = match rest.rfind(|c: char| self.is_separator(c)) {
            Some(i) => (&rest[..=i], &rest[i + 1..]),
            None => ("", rest),
        };
        if name.is_empty() || name == "." || name == ".." {
            return None;
        }

        let parent = if volume_len == 0 && parent_rest.is_empty() {
            ".".to_string()
        } else {
            self.clean(&cleaned[..volume_len + parent_rest.len()])
        };
        Some((parent, name.to_string()))
    }

    /// Render a root boundary using this syntax's separator.
    fn render(&self, boundary: &Boundary) -> String {
        boundary.to_path_string(self.separator())
    }
}

/// Collapse `.` and `..` segments, Plan 9 style.
pub(crate) fn collapse<'a>(
    segments: impl Iterator<Item = &'a str>,
    rooted: bool,
) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                if out.last().is_some_and(|last| *last != "..") {
                    out.pop();
                } else if !rooted {
                    out.push("..");
                }
            }
            name => out.push(name),
        }
    }
    out
}

/// POSIX path rules: `/` separates, there are no volumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PosixSyntax;

impl PathSyntax for PosixSyntax {
    fn separator(&self) -> char {
        '/'
    }

    fn is_separator(&self, c: char) -> bool {
        c == '/'
    }

    fn split_volume<'a>(&self, path: &'a str) -> (Option<Volume>, &'a str) {
        (None, path)
    }

    fn is_absolute(&self, path: &str) -> bool {
        path.starts_with('/')
    }
}

/// The syntax of the platform this crate was compiled for.
#[cfg(windows)]
pub type HostSyntax = crate::path::windows::WindowsSyntax;

/// The syntax of the platform this crate was compiled for.
#[cfg(not(windows))]
pub type HostSyntax = PosixSyntax;
