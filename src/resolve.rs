use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::errors::{CmodError, Result};

/// Matches an angle-bracket include directive and captures the header token.
///
/// Only the angle-bracket form is recognized; quoted includes are
/// deliberately not matched. Horizontal whitespace is tolerated around the
/// `#`, the keyword, and inside the brackets.
static INCLUDE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[ \t]*include[ \t]*<[ \t]*(\S+)[ \t]*>").unwrap());

/// Resolves the closure of files reachable from `header_file`.
///
/// Starting from the header, the resolver follows two kinds of edges
/// depth-first: same-basename siblings across `extensions` (so a header
/// pulls in its implementation files), and `#include <...>` directives
/// found by scanning each file line by line. Every path in the returned set
/// is relative to `root` and existed as a regular file when it was visited.
///
/// A starting header that does not exist yields an empty set and no error;
/// only I/O failures on files that are present are fatal.
pub fn resolve(root: &Path, header_file: &str, extensions: &[String]) -> Result<HashSet<String>> {
    let mut visited = HashSet::new();
    visit(root, header_file, extensions, &mut visited)?;
    Ok(visited)
}

/// Visits one file: records it, derives its extension siblings, then scans
/// it for include directives, recursing into each discovery.
///
/// The current path is inserted into `visited` before any recursion so that
/// mutually including files terminate.
fn visit(
    root: &Path,
    current: &str,
    extensions: &[String],
    visited: &mut HashSet<String>,
) -> Result<()> {
    let full_path = root.join(current);
    if !full_path.is_file() || visited.contains(current) {
        return Ok(());
    }
    visited.insert(current.to_string());
    debug!(file = current, "indexing file");

    let current_extension = extension_of(current);
    for extension in extensions {
        if current_extension == extension.as_str() {
            continue;
        }
        let sibling = sibling_path(current, current_extension, extension);
        visit(root, &sibling, extensions, visited)?;
    }

    let file = File::open(&full_path).map_err(|e| CmodError::Scan {
        message: format!("failed to open file: {e}"),
        path: current.to_string(),
    })?;
    // Scan byte-oriented: source trees routinely carry non-UTF-8 bytes in
    // comments, and those lines must still be scanned rather than abort the
    // run. Only genuine read errors are fatal.
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(|e| CmodError::Scan {
            message: format!("failed to read line: {e}"),
            path: current.to_string(),
        })?;
        if read == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&line);
        if let Some(captures) = INCLUDE_PATTERN.captures(&text) {
            let header = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            visit(root, header, extensions, visited)?;
        }
    }
    Ok(())
}

/// Returns the extension used for sibling derivation: the text after the
/// last `.` of the final path component, or empty when there is no dot.
fn extension_of(relative_path: &str) -> &str {
    let file_name = match relative_path.rfind('/') {
        Some(idx) => &relative_path[idx + 1..],
        None => relative_path,
    };
    match file_name.rfind('.') {
        Some(idx) => &file_name[idx + 1..],
        None => "",
    }
}

/// Builds a sibling path by slicing `current_extension` off the end of
/// `relative_path` and appending `extension` in its place.
///
/// The slice keeps the dot of the original name. A path with no extension
/// gets the new one appended directly; the result then simply fails the
/// existence check during the visit.
fn sibling_path(relative_path: &str, current_extension: &str, extension: &str) -> String {
    let stem = &relative_path[..relative_path.len() - current_extension.len()];
    format!("{stem}{extension}")
}
