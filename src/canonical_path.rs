use std::{io::ErrorKind, path::{Path, PathBuf}};

use crate::Error;

/// A source path paired with its canonicalized form. Equality is on the
/// canonical form, so the same file reached through different relative
/// spellings compares equal on the resolution stack.
#[derive(Debug, Clone)]
pub struct CanonicalPath {
    source: PathBuf,
    canonical: PathBuf,
}

impl CanonicalPath {
    pub fn new<P: AsRef<Path>>(source: P) -> Result<Self, Error> {
        let source = source.as_ref().to_owned();
        let canonical = std::fs::canonicalize(&source).map_err(|e| {
            match e.kind() {
                ErrorKind::NotFound => Error::SourceUnreadable(source.clone()),
                _ => Error::IOError(e),
            }
        })?;

        Ok(CanonicalPath { source, canonical })
    }

    /// The path as the caller spelled it, for error messages.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl PartialEq for CanonicalPath {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for CanonicalPath {}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        &self.canonical
    }
}
