use crate::inspector::{InspectionReport, SymbolTable};
use crate::text::capitalize_first;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

/// Result of a single string operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextResult {
    pub operation: String,
    pub input: String,
    pub output: TextValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextValue {
    Text(String),
    Count(usize),
    Flag(bool),
}

impl std::fmt::Display for TextValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextValue::Text(text) => write!(f, "{text}"),
            TextValue::Count(count) => write!(f, "{count}"),
            TextValue::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

pub trait OutputWriter {
    fn write_symbols(&mut self, symbols: &SymbolTable) -> anyhow::Result<()>;
    fn write_docstrings(&mut self, docstrings: &[String]) -> anyhow::Result<()>;
    fn write_comments(&mut self, comments: &[String]) -> anyhow::Result<()>;
    fn write_report(&mut self, report: &InspectionReport) -> anyhow::Result<()>;
    fn write_text_result(&mut self, result: &TextResult) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_symbols(&mut self, symbols: &SymbolTable) -> anyhow::Result<()> {
        self.write_json(symbols)
    }

    fn write_docstrings(&mut self, docstrings: &[String]) -> anyhow::Result<()> {
        self.write_json(docstrings)
    }

    fn write_comments(&mut self, comments: &[String]) -> anyhow::Result<()> {
        self.write_json(comments)
    }

    fn write_report(&mut self, report: &InspectionReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_text_result(&mut self, result: &TextResult) -> anyhow::Result<()> {
        self.write_json(result)
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_section(&mut self, title: &str, items: &[String]) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} ({})",
            capitalize_first(title).as_str().bold().blue(),
            items.len()
        )?;
        if items.is_empty() {
            writeln!(self.writer, "  {}", "none".dimmed())?;
        }
        for item in items {
            let mut lines = item.lines();
            match lines.next() {
                Some(first) => writeln!(self.writer, "  - {first}")?,
                None => writeln!(self.writer, "  - {}", "\"\"".dimmed())?,
            }
            for line in lines {
                writeln!(self.writer, "    {line}")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_symbols(&mut self, symbols: &SymbolTable) -> anyhow::Result<()> {
        self.write_section("functions", &symbols.functions)?;
        self.write_section("classes", &symbols.classes)?;
        self.write_section("imports", &symbols.imports)
    }

    fn write_docstrings(&mut self, docstrings: &[String]) -> anyhow::Result<()> {
        self.write_section("docstrings", docstrings)
    }

    fn write_comments(&mut self, comments: &[String]) -> anyhow::Result<()> {
        self.write_section("comments", comments)
    }

    fn write_report(&mut self, report: &InspectionReport) -> anyhow::Result<()> {
        self.write_symbols(&report.symbols)?;
        self.write_docstrings(&report.docstrings)?;
        self.write_comments(&report.comments)
    }

    fn write_text_result(&mut self, result: &TextResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", result.output)?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
