use std::time::Instant;

use crate::config::ExtractConfig;
use crate::errors::Result;
use crate::output;
use crate::resolve;

/// Central orchestrator for one extraction run: resolves the closure of the
/// requested header, then materializes it under the output directory.
pub struct Extractor {
    config: ExtractConfig,
}

/// Result of a completed extraction.
pub struct ExtractResult {
    /// Number of files resolved and copied.
    pub file_count: usize,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

impl Extractor {
    /// Creates an extractor after validating the configuration.
    pub fn new(config: ExtractConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Resolves the header's closure and copies it to the output directory.
    pub fn run(&self) -> Result<ExtractResult> {
        let start = Instant::now();

        let files = resolve::resolve(
            &self.config.input_path,
            &self.config.header_file,
            &self.config.source_extensions,
        )?;
        output::copy_files(
            &self.config.input_path,
            self.config.output_path.as_deref(),
            self.config.boilerplate_path.as_deref(),
            &files,
        )?;

        Ok(ExtractResult {
            file_count: files.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
