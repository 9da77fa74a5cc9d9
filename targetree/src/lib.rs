#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # targetree
//!
//! A library for resolving a set of backup target paths into a single tree.
//!
//! Each target is decomposed into the root boundary it is anchored to (the
//! current directory, some number of `..` steps, a filesystem root, a drive
//! or a UNC share) and the components leading down to it. Targets are then
//! merged into a forest whose top-level names are unique, and whose internal
//! nodes remember which directory to read metadata from.
//!
//! ## Core Types
//!
//! - [`Tree`], [`Entry`] and [`Node`]: The resolved forest
//! - [`TreeResolver`] and [`AncestorPolicy`]: Building a tree from targets
//! - [`PathSyntax`] and [`Boundary`]: Path decomposition for POSIX and Windows
//! - [`DirectoryLister`]: Directory listing used when a target contains others
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use targetree::fs::MemoryLister;
//! use targetree::path::WindowsSyntax;
//! use targetree::{build_tree, Boundary};
//!
//! let lister = MemoryLister::new();
//! let tree = build_tree(&WindowsSyntax, &lister, &[r"c:\users\foobar", r"c:\windows"]).unwrap();
//!
//! let c = tree.get("c").unwrap();
//! assert_eq!(c.root(), &Boundary::Drive { letter: 'c' });
//! assert_eq!(c.node().file_info_path(), Some(r"c:\"));
//! assert_eq!(tree.leaf_paths(), [r"c:\users\foobar", r"c:\windows"]);
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod output;
pub mod path;
pub mod targets;
pub mod tree;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fs::{DirectoryLister, LocalLister, MemoryLister};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::TreeFormatter;
pub use path::{Boundary, PathSyntax};
pub use tree::{build_tree, AncestorPolicy, Entry, Node, Tree, TreeResolver};
