use cmod::config::ExtractConfig;
use cmod::extractor::Extractor;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_full_extraction() {
    let dir = TempDir::new().unwrap();
    let project = dir.path();

    // A small C++ tree: requested header, its implementation, and a
    // transitive dependency reached through the implementation file.
    write(
        project,
        "folly/Conv.h",
        "#pragma once\n#include <folly/Range.h>\nint conv();\n",
    );
    write(
        project,
        "folly/Conv.cc",
        "#include <folly/Conv.h>\nint conv() { return 7; }\n",
    );
    write(project, "folly/Range.h", "#pragma once\nstruct Range {};\n");
    write(project, "folly/Unrelated.h", "#pragma once\n");

    let output = TempDir::new().unwrap();
    let config = ExtractConfig {
        input_path: project.to_path_buf(),
        output_path: Some(output.path().to_path_buf()),
        header_file: "folly/Conv.h".to_string(),
        ..ExtractConfig::default()
    };

    let result = Extractor::new(config).unwrap().run().unwrap();
    assert_eq!(result.file_count, 3);

    assert!(output.path().join("folly/Conv.h").is_file());
    assert!(output.path().join("folly/Conv.cc").is_file());
    assert!(output.path().join("folly/Range.h").is_file());
    assert!(!output.path().join("folly/Unrelated.h").exists());
}

#[test]
fn test_extraction_with_boilerplate() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.h", "int a;\n");
    write(dir.path(), "NOTICE", "// Licensed.\n");

    let output = TempDir::new().unwrap();
    let config = ExtractConfig {
        input_path: dir.path().to_path_buf(),
        output_path: Some(output.path().to_path_buf()),
        header_file: "a.h".to_string(),
        boilerplate_path: Some(dir.path().join("NOTICE")),
        ..ExtractConfig::default()
    };

    Extractor::new(config).unwrap().run().unwrap();
    assert_eq!(
        fs::read_to_string(output.path().join("a.h")).unwrap(),
        "// Licensed.\nint a;\n"
    );
}

#[test]
fn test_nonexistent_header_extracts_nothing() {
    let dir = TempDir::new().unwrap();
    let config = ExtractConfig {
        input_path: dir.path().to_path_buf(),
        header_file: "missing.h".to_string(),
        ..ExtractConfig::default()
    };

    let result = Extractor::new(config).unwrap().run().unwrap();
    assert_eq!(result.file_count, 0);
}

#[test]
fn test_missing_input_rejected_at_construction() {
    let config = ExtractConfig {
        header_file: "a.h".to_string(),
        ..ExtractConfig::default()
    };
    assert!(Extractor::new(config).is_err());
}
