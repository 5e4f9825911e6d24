pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter, TextResult, TextValue};

use crate::errors::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Read source text from a file, or from stdin when the path is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    fs::read_to_string(path).map_err(|e| {
        Error::file_system(format!("Failed to read {}", path.display()), path, e)
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        Error::file_system(format!("Failed to write {}", path.display()), path, e)
    })
}
