use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::config::DEFAULT_OUTPUT_DIR;
use crate::errors::{CmodError, Result};

/// Copies every resolved file from `root` into the output tree, recreating
/// the relative directory structure.
///
/// When `boilerplate_path` is given its contents are read once up front and
/// written at the start of every destination file. An `output_dir` of `None`
/// falls back to `<root>/dist`. Existing destination files are overwritten.
///
/// Any failure to read the boilerplate, create a directory or file, or copy
/// bytes aborts the whole operation; files copied before the failure are
/// left in place.
pub fn copy_files(
    root: &Path,
    output_dir: Option<&Path>,
    boilerplate_path: Option<&Path>,
    files: &HashSet<String>,
) -> Result<()> {
    let boilerplate = match boilerplate_path {
        Some(path) => Some(fs::read(path).map_err(|e| CmodError::Copy {
            message: format!("failed to read boilerplate: {e}"),
            path: path.display().to_string(),
        })?),
        None => None,
    };

    let fallback;
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => {
            fallback = root.join(DEFAULT_OUTPUT_DIR);
            info!(default = %fallback.display(), "output path not specified");
            &fallback
        }
    };

    for file in files {
        copy_one(root, output_dir, boilerplate.as_deref(), file)?;
        debug!(file, "file copied");
    }
    Ok(())
}

/// Copies a single relative path from the input tree to the output tree.
fn copy_one(
    root: &Path,
    output_dir: &Path,
    boilerplate: Option<&[u8]>,
    file: &str,
) -> Result<()> {
    let destination = output_dir.join(file);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| CmodError::Copy {
            message: format!("failed to create output directory: {e}"),
            path: parent.display().to_string(),
        })?;
    }

    let mut output = File::create(&destination).map_err(|e| CmodError::Copy {
        message: format!("failed to create output file: {e}"),
        path: file.to_string(),
    })?;
    if let Some(bytes) = boilerplate {
        output.write_all(bytes).map_err(|e| CmodError::Copy {
            message: format!("failed to write boilerplate: {e}"),
            path: file.to_string(),
        })?;
    }

    let mut input = File::open(root.join(file)).map_err(|e| CmodError::Copy {
        message: format!("failed to open input file: {e}"),
        path: file.to_string(),
    })?;
    io::copy(&mut input, &mut output).map_err(|e| CmodError::Copy {
        message: format!("failed to copy file: {e}"),
        path: file.to_string(),
    })?;
    Ok(())
}
