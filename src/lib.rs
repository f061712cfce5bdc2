#![doc = include_str!("../README.md")]
extern crate thiserror;

mod canonical_path;
mod directive;
mod flattener;
mod report;
mod resolver;

use std::path::{Path, PathBuf};

pub use flattener::Flattener;

/// Flattens `source` into `output`, resolving angled directives (and quoted
/// directives that miss the local directory) against `search_path` in order.
///
/// `output` is opened in append mode and created if it does not exist.
pub fn flatten<P, Q>(source: P, output: Q, search_path: &[PathBuf]) -> Result<(), Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Flattener::new(search_path).flatten(source, output)
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO Error")]
    IOError(#[from] std::io::Error),

    /// The input file could not be opened. Unlike
    /// [`Error::UnresolvedInclude`], no diagnostic line is emitted.
    #[error("could not open source file '{}'", .0.display())]
    SourceUnreadable(PathBuf),

    #[error("{}", report::format_unresolved(.path, .origin, *.line))]
    UnresolvedInclude {
        path: PathBuf,
        origin: PathBuf,
        line: usize,
    },

    #[error("cyclic include detected between '{}' and '{}'", .0.display(), .1.display())]
    CyclicInclude(PathBuf, PathBuf),
}
