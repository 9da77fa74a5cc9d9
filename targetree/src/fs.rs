//! Directory listing for ancestor expansion.
//!
//! The tree builder only ever needs one filesystem query: the names inside a
//! directory target that also has separately requested descendants. That
//! query goes through [`DirectoryLister`] so the builder can run against the
//! real filesystem ([`LocalLister`]) or an in-memory layout
//! ([`MemoryLister`]).

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::path::PathSyntax;

/// Lists the entry names of a directory.
///
/// `dir` is a cleaned target path in the syntax the tree is being built
/// with. Implementations return bare names, never `.` or `..`.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryLister {
    /// Return the names of every entry directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be read.
    fn read_dir_names(&self, dir: &str) -> io::Result<Vec<String>>;
}

/// Lists directories on the local filesystem.
///
/// Relative directories are resolved against the process working directory
/// unless a base directory is set.
///
/// # Examples
///
/// ```no_run
/// use targetree::fs::{DirectoryLister, LocalLister};
///
/// let names = LocalLister::new().read_dir_names("src").unwrap();
/// assert!(names.iter().all(|n| n != "." && n != ".."));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalLister {
    base_dir: Option<PathBuf>,
}

impl LocalLister {
    /// Create a lister relative to the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lister that resolves relative directories against `base`.
    #[must_use]
    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base.into()),
        }
    }

    fn resolve(&self, dir: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(dir),
            None => PathBuf::from(dir),
        }
    }
}

impl DirectoryLister for LocalLister {
    fn read_dir_names(&self, dir: &str) -> io::Result<Vec<String>> {
        let path = self.resolve(dir);
        log::trace!("listing directory {}", path.display());

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&path)? {
            let entry = entry?;
            let name = entry.file_name().into_string().map_err(|raw| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "entry name {} in {} is not valid UTF-8",
                        Path::new(&raw).display(),
                        path.display()
                    ),
                )
            })?;
            names.push(name);
        }
        names.sort();
        Ok(names)
    }
}

/// An in-memory directory layout.
///
/// Directories are keyed by their cleaned path; listing an unknown directory
/// fails with [`io::ErrorKind::NotFound`].
///
/// # Examples
///
/// ```
/// use targetree::fs::{DirectoryLister, MemoryLister};
/// use targetree::path::PosixSyntax;
///
/// let lister = MemoryLister::from_files(&PosixSyntax, ["foo/work", "foo/other", "bar"]);
/// assert_eq!(lister.read_dir_names("foo").unwrap(), ["other", "work"]);
/// assert_eq!(lister.read_dir_names(".").unwrap(), ["bar", "foo"]);
/// assert!(lister.read_dir_names("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLister {
    dirs: BTreeMap<String, BTreeSet<String>>,
}

impl MemoryLister {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout containing `files` and every directory above them.
    #[must_use]
    pub fn from_files<I, S>(syntax: &dyn PathSyntax, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lister = Self::new();
        for file in files {
            let mut current = syntax.clean(file.as_ref());
            while let Some((parent, name)) = syntax.parent_and_name(&current) {
                lister.dirs.entry(parent.clone()).or_default().insert(name);
                current = parent;
            }
        }
        lister
    }

    /// Add a directory with the given entry names.
    #[must_use]
    pub fn with_dir<I, S>(mut self, dir: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dirs
            .entry(dir.to_string())
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }
}

impl DirectoryLister for MemoryLister {
    fn read_dir_names(&self, dir: &str) -> io::Result<Vec<String>> {
        self.dirs
            .get(dir)
            .map(|names| names.iter().cloned().collect())
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no such directory: {dir}"))
            })
    }
}
