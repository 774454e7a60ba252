use clap::Parser;
use std::path::PathBuf;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cmod::config::ExtractConfig;
use cmod::extractor::Extractor;

/// Extract used-only sources from a huge C/C++ project.
#[derive(Parser)]
#[command(
    name = "cmod",
    about = "Extract used only sources from huge c/c++ project.",
    long_about = "Extract used only sources from huge c/c++ project to embedded into other project as in-tree dependency."
)]
struct Cli {
    /// Input project root path
    #[arg(short = 'p', long = "input-path")]
    input_path: PathBuf,

    /// Extracted used only sources output path (default: <input>/dist)
    #[arg(short = 'o', long = "output-path")]
    output_path: Option<PathBuf>,

    /// The header file to extract, like "folly/concurrency/ConcurrentHashMap.h"
    /// for #include<folly/concurrency/ConcurrentHashMap.h>
    #[arg(short = 'i', long = "header-file")]
    header_file: String,

    /// License header file path
    #[arg(short = 'b', long = "boilerplate-path")]
    boilerplate_path: Option<PathBuf>,

    /// The source file extensions
    #[arg(
        short = 's',
        long = "source-extensions",
        value_delimiter = ',',
        default_value = "cc,cpp,S"
    )]
    source_extensions: Vec<String>,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let result = run(cli);
    info!("finished");
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> cmod::errors::Result<()> {
    let config = ExtractConfig {
        input_path: cli.input_path,
        output_path: cli.output_path,
        header_file: cli.header_file,
        boilerplate_path: cli.boilerplate_path,
        source_extensions: cli.source_extensions,
    };
    let result = Extractor::new(config)?.run()?;
    println!(
        "Extracted {} files in {}ms",
        result.file_count, result.duration_ms
    );
    Ok(())
}
