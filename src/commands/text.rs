use crate::cli::TextOperation;
use crate::errors::Result;
use crate::io::{create_writer, OutputFormat, TextResult, TextValue};
use crate::text;
use clap::ValueEnum;
use std::io::Write;

pub fn apply(operation: TextOperation, input: &str) -> Result<TextValue> {
    let value = match operation {
        TextOperation::Capitalize => TextValue::Text(text::capitalize(input)?),
        TextOperation::Reverse => TextValue::Text(text::reverse(input)),
        TextOperation::CountWords => TextValue::Count(text::count_words(input)),
        TextOperation::Palindrome => TextValue::Flag(text::is_palindrome(input)),
    };
    Ok(value)
}

pub fn run_text<W: Write>(
    operation: TextOperation,
    input: &str,
    format: OutputFormat,
    out: W,
) -> anyhow::Result<()> {
    let output = apply(operation, input)?;
    let result = TextResult {
        operation: operation_name(operation),
        input: input.to_string(),
        output,
    };
    create_writer(format, out).write_text_result(&result)
}

fn operation_name(operation: TextOperation) -> String {
    operation
        .to_possible_value()
        .map(|value| value.get_name().to_string())
        .unwrap_or_default()
}
