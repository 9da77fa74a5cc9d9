//! Root-boundary computation.

use crate::path::components::path_components;
use crate::path::syntax::{PathSyntax, Volume};
use crate::path::types::Boundary;

/// Compute the furthest-back boundary `target` can be expressed relative to.
///
/// This never fails and never touches the filesystem. Absolute targets are
/// anchored to the root implied by their syntax; relative targets are
/// anchored to the directory reached by the `..` steps that survive cleaning.
///
/// # Examples
///
/// ```
/// use targetree::path::{root_boundary, Boundary, PosixSyntax, WindowsSyntax};
///
/// assert_eq!(root_boundary(&PosixSyntax, "foo/bar"), Boundary::CURRENT);
/// assert_eq!(
///     root_boundary(&PosixSyntax, "../foo/../../bar"),
///     Boundary::Relative { ascend: 2 }
/// );
/// assert_eq!(root_boundary(&PosixSyntax, "/home/user"), Boundary::Root);
/// assert_eq!(
///     root_boundary(&WindowsSyntax, r"c:\users"),
///     Boundary::Drive { letter: 'c' }
/// );
/// ```
#[must_use]
pub fn root_boundary(syntax: &dyn PathSyntax, target: &str) -> Boundary {
    let cleaned = syntax.clean(target);
    let (volume, rest) = syntax.split_volume(&cleaned);
    let rooted = rest.starts_with(|c: char| syntax.is_separator(c));

    match volume {
        Some(Volume::Unc { host, share }) => Boundary::UncShare { host, share },
        Some(Volume::Drive(letter)) if rooted => Boundary::Drive { letter },
        Some(Volume::Drive(letter)) => Boundary::DriveRelative { letter },
        None if rooted => Boundary::Root,
        None => {
            let ascend = path_components(syntax, &cleaned, true)
                .names()
                .iter()
                .take_while(|name| *name == "..")
                .count();
            Boundary::Relative { ascend }
        }
    }
}
