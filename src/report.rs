//! Diagnostic for an unresolved include directive.

use std::path::Path;

pub(crate) fn format_unresolved(path: &Path, origin: &Path, line: usize) -> String {
    format!(
        "unknown include file {} at file {} at line {}",
        path.display(),
        origin.display(),
        line
    )
}

/// Prints the diagnostic to stdout. Called exactly once per failed run, at
/// the failure site; the flattener returns failure right after.
pub(crate) fn emit_unresolved(path: &Path, origin: &Path, line: usize) {
    println!("{}", format_unresolved(path, origin, line));
}
