//! Lexical path handling for backup targets.
//!
//! Nothing in this module touches the filesystem. Every question about a
//! target string is answered by a [`PathSyntax`] provider, so POSIX, drive
//! and UNC inputs can be resolved identically on any host.
//!
//! # Key Concepts
//!
//! ## Root boundary
//!
//! The [`Boundary`] of a target is the furthest-back directory, drive or
//! share it can be expressed relative to:
//!
//! - `.` for an ordinary relative path
//! - `..`, `../..`, ... for relative paths that ascend
//! - `/` for a POSIX absolute path
//! - `c:\` for a drive path, `\\host\share\` for a UNC path
//!
//! ## Components
//!
//! The [`Components`] of a target are the names between its boundary and the
//! target itself. Drive letters and UNC host/share names form a *virtual
//! prefix*: they label tree nodes but are not directories that can be
//! listed.
//!
//! # Examples
//!
//! ```
//! use targetree::path::{path_components, root_boundary, Boundary, PosixSyntax};
//!
//! let target = "../foo/work/user";
//! assert_eq!(root_boundary(&PosixSyntax, target), Boundary::Relative { ascend: 1 });
//! assert_eq!(
//!     path_components(&PosixSyntax, target, false).names(),
//!     ["foo", "work", "user"]
//! );
//! ```

mod boundary;
mod components;
pub mod syntax;
mod types;
mod windows;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use boundary::root_boundary;
pub use components::path_components;
pub use syntax::{HostSyntax, PathSyntax, PosixSyntax, Volume};
pub use types::{Boundary, Components};
pub use windows::WindowsSyntax;
