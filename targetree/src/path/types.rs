//! Core types for target path decomposition.
//!
//! This module defines the values computed per target before it is merged
//! into a tree: the [`Boundary`] a target is anchored to and the
//! [`Components`] leading from that boundary down to the target.

use std::fmt;

/// The furthest-back directory, drive or share a target can be expressed
/// relative to.
///
/// Two targets end up in the same top-level tree entry only if their
/// boundaries compare equal. Comparison is structural, so `c:\` and `c:/`
/// (which clean to the same drive) are equal, while `.` and `..` are not.
///
/// # Examples
///
/// ```
/// use targetree::path::Boundary;
///
/// assert_eq!(Boundary::Relative { ascend: 0 }.to_path_string('/'), ".");
/// assert_eq!(Boundary::Relative { ascend: 2 }.to_path_string('/'), "../..");
/// assert_eq!(Boundary::Drive { letter: 'c' }.to_path_string('\\'), r"c:\");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// A relative path needing `ascend` leading `..` steps.
    Relative {
        /// Number of leading ascensions; zero means the current directory.
        ascend: usize,
    },

    /// The filesystem root: `/` on POSIX, the current drive's root `\` on
    /// Windows.
    Root,

    /// The root of a drive, e.g. `c:\`.
    Drive {
        /// Drive letter, case preserved.
        letter: char,
    },

    /// The current directory of a drive, e.g. `c:` in `c:foo`.
    DriveRelative {
        /// Drive letter, case preserved.
        letter: char,
    },

    /// The root of a UNC share, e.g. `\\host\share\`.
    UncShare {
        /// Server name.
        host: String,
        /// Share name.
        share: String,
    },
}

impl Boundary {
    /// The current directory.
    pub const CURRENT: Self = Self::Relative { ascend: 0 };

    /// Render the boundary as a path string using `separator`.
    #[must_use]
    pub fn to_path_string(&self, separator: char) -> String {
        match self {
            Self::Relative { ascend: 0 } => ".".to_string(),
            Self::Relative { ascend } => vec![".."; *ascend].join(separator.to_string().as_str()),
            Self::Root => separator.to_string(),
            Self::Drive { letter } => format!("{letter}:{separator}"),
            Self::DriveRelative { letter } => format!("{letter}:"),
            Self::UncShare { host, share } => {
                format!("{separator}{separator}{host}{separator}{share}{separator}")
            }
        }
    }

    /// Whether this boundary anchors a relative path.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative { .. } | Self::DriveRelative { .. })
    }
}

impl fmt::Display for Boundary {
    /// Displays with `/`; use [`Boundary::to_path_string`] for other
    /// separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_string('/'))
    }
}

/// The ordered path segments between a boundary and a target.
///
/// The first `virtual_count` names do not correspond to a literal, listable
/// directory: a drive letter (`c`), or a UNC host and share.
///
/// # Examples
///
/// ```
/// use targetree::path::{path_components, WindowsSyntax};
///
/// let components = path_components(&WindowsSyntax, r"c:\users\foobar", false);
/// assert_eq!(components.names(), ["c", "users", "foobar"]);
/// assert_eq!(components.virtual_count(), 1);
/// assert_eq!(components.real_names(), ["users", "foobar"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    names: Vec<String>,
    virtual_count: usize,
}

impl Components {
    /// Create components from names and a virtual prefix length.
    ///
    /// `virtual_count` is clamped to the number of names.
    #[must_use]
    pub fn new(names: Vec<String>, virtual_count: usize) -> Self {
        let virtual_count = virtual_count.min(names.len());
        Self {
            names,
            virtual_count,
        }
    }

    /// All names, virtual prefix included.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of leading virtual names.
    #[must_use]
    pub fn virtual_count(&self) -> usize {
        self.virtual_count
    }

    /// The names after the virtual prefix.
    #[must_use]
    pub fn real_names(&self) -> &[String] {
        &self.names[self.virtual_count..]
    }

    /// Whether the name at `index` belongs to the virtual prefix.
    #[must_use]
    pub fn is_virtual(&self, index: usize) -> bool {
        index < self.virtual_count
    }

    /// Number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether there are no names at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Convert into the underlying names.
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}
