#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub use fabricmon_config_test_utils::init_tracing;

/// Write `contents` to a fresh temp file and hand it back.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}
