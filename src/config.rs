use std::path::PathBuf;

use crate::errors::{CmodError, Result};

/// Directory created under the project root when no output path is given.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Default source extensions paired with an extracted header.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["cc", "cpp", "S"];

/// Configuration for one extraction run.
///
/// Describes where to read from, which header starts the closure, and where
/// the extracted subset is written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Root of the C/C++ project to extract from.
    pub input_path: PathBuf,
    /// Destination for the extracted subset; `None` means `<input>/dist`.
    pub output_path: Option<PathBuf>,
    /// Starting header, relative to `input_path`
    /// (e.g. `folly/concurrency/ConcurrentHashMap.h`).
    pub header_file: String,
    /// Optional license text prefixed to every copied file.
    pub boilerplate_path: Option<PathBuf>,
    /// Extensions tried when looking for sibling implementation files,
    /// without a leading dot.
    pub source_extensions: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_path: None,
            header_file: String::new(),
            boilerplate_path: None,
            source_extensions: DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ExtractConfig {
    /// Checks that the configuration is complete enough to run.
    ///
    /// The input path and header file are required; the input path must be an
    /// existing directory. Everything else is optional.
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() || self.header_file.is_empty() {
            return Err(CmodError::Config {
                message: "input path and header file should be specified".to_string(),
            });
        }
        if !self.input_path.is_dir() {
            return Err(CmodError::Config {
                message: format!(
                    "input path '{}' is not a directory",
                    self.input_path.display()
                ),
            });
        }
        Ok(())
    }
}
