use crate::{canonical_path::CanonicalPath, directive, report, resolver, Error};
use std::{
    cell::RefCell,
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Drives the depth-first expansion. Holds the search path for the whole
/// run and the stack of files currently being expanded, used to detect
/// include cycles.
#[derive(Default)]
pub struct Flattener {
    search_path: Vec<PathBuf>,
    resolution_stack: RefCell<Vec<CanonicalPath>>,
}

impl Flattener {
    pub fn new(search_path: &[PathBuf]) -> Self {
        Flattener {
            search_path: search_path.to_vec(),
            ..Self::default()
        }
    }

    /// Flattens `source` into the file at `output`, which is opened in
    /// append mode and created if absent. Output written before a failure
    /// is kept, there is no rollback.
    pub fn flatten<P, Q>(&self, source: P, output: Q) -> Result<(), Error>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output.as_ref())?;
        let mut sink = BufWriter::new(file);

        let result = self.flatten_into(source.as_ref(), &mut sink);
        let flushed = sink.flush().map_err(Error::from);
        result.and(flushed)
    }

    /// The recursive core: every frame of the expansion writes into the
    /// same `sink`. A file already on the resolution stack is a cycle and
    /// fails with [`Error::CyclicInclude`] instead of recursing further.
    pub fn flatten_into<W: Write>(&self, source: &Path, sink: &mut W) -> Result<(), Error> {
        let canonical = CanonicalPath::new(source)?;
        if self.resolution_stack.borrow().contains(&canonical) {
            let stack = self.resolution_stack.borrow();
            let last = stack.last().unwrap();
            return Err(Error::CyclicInclude(
                last.source().to_owned(),
                canonical.source().to_owned(),
            ));
        }
        self.resolution_stack.borrow_mut().push(canonical);

        tracing::debug!("flattening {}", source.display());
        let result = self.scan_lines(source, sink);
        self.resolution_stack.borrow_mut().pop();

        result
    }

    fn scan_lines<W: Write>(&self, source: &Path, sink: &mut W) -> Result<(), Error> {
        let file =
            File::open(source).map_err(|_| Error::SourceUnreadable(source.to_owned()))?;
        let origin_dir = source.parent().unwrap_or_else(|| Path::new(""));

        let mut line_number = 0;
        for line in BufReader::new(file).lines() {
            let line = line?;
            line_number += 1;

            match directive::match_directive(&line) {
                Some(include) => {
                    match resolver::resolve(&include, origin_dir, &self.search_path) {
                        Some(target) => {
                            tracing::debug!(
                                "resolved '{}' to {}",
                                include.path(),
                                target.display()
                            );
                            self.flatten_into(&target, sink)?;
                        }
                        None => {
                            report::emit_unresolved(
                                Path::new(include.path()),
                                source,
                                line_number,
                            );
                            return Err(Error::UnresolvedInclude {
                                path: PathBuf::from(include.path()),
                                origin: source.to_owned(),
                                line: line_number,
                            });
                        }
                    }
                }
                None => writeln!(sink, "{}", line)?,
            }
        }

        Ok(())
    }
}
