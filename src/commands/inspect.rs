use crate::inspector::{self, DocstringStyle};
use crate::io::{self, create_writer, OutputFormat};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Which part of the inspector a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    Symbols,
    Docstrings,
    Comments,
    All,
}

impl Extraction {
    fn needs_parse(self) -> bool {
        !matches!(self, Extraction::Comments)
    }
}

#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub path: PathBuf,
    pub extraction: Extraction,
    pub format: OutputFormat,
    pub docstring_style: DocstringStyle,
}

pub fn run_inspect<W: Write>(config: &InspectConfig, out: W) -> Result<()> {
    let source = io::read_source(&config.path)
        .with_context(|| format!("Failed to load {}", config.path.display()))?;

    if config.extraction.needs_parse() {
        if let Err(e) = inspector::check_syntax(&source) {
            log::warn!(
                "{}: {}. Parsed results will be empty.",
                config.path.display(),
                e
            );
        }
    }

    let mut writer = create_writer(config.format, out);
    match config.extraction {
        Extraction::Symbols => writer.write_symbols(&inspector::parse_code(&source)),
        Extraction::Docstrings => writer.write_docstrings(&inspector::extract_docstrings_with(
            &source,
            config.docstring_style,
        )),
        Extraction::Comments => writer.write_comments(&inspector::extract_comments(&source)),
        Extraction::All => {
            writer.write_report(&inspector::inspect(&source, config.docstring_style))
        }
    }
}
