//! Search-order policy for resolving a directive's referenced path.

use crate::directive::{Include, IncludeKind};
use std::path::{Path, PathBuf};

/// Resolves `include` to a concrete path, or `None` if no candidate exists.
///
/// Quoted directives probe the originating file's directory before the
/// search path; angled directives consult the search path only. Within the
/// search path the first entry containing the target wins, later matches
/// are never considered. Probing checks bare existence, so a directory with
/// the referenced name satisfies it.
pub(crate) fn resolve(
    include: &Include,
    origin_dir: &Path,
    search_path: &[PathBuf],
) -> Option<PathBuf> {
    if include.kind() == IncludeKind::Quoted {
        let local = origin_dir.join(include.path());
        if local.exists() {
            return Some(local);
        }
    }

    find_in_directories(search_path, include.path())
}

fn find_in_directories(search_path: &[PathBuf], path: &str) -> Option<PathBuf> {
    search_path
        .iter()
        .map(|dir| dir.join(path))
        .find(|candidate| candidate.exists())
}
