use crate::io::output::OutputFormat;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextOperation {
    /// Upper-case the first character
    Capitalize,
    /// Reverse the characters
    Reverse,
    /// Count whitespace-separated words
    CountWords,
    /// Check for a case- and punctuation-insensitive palindrome
    Palindrome,
}

#[derive(Parser, Debug)]
#[command(name = "pyinspect")]
#[command(about = "Python source inspector and string helpers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format (overrides .pyinspect.toml)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List function, class, and import names
    Symbols {
        /// Python file to inspect (`-` for stdin)
        path: PathBuf,
    },

    /// List docstrings of functions and classes
    Docstrings {
        /// Python file to inspect (`-` for stdin)
        path: PathBuf,

        /// Keep docstring indentation as written
        #[arg(long)]
        raw: bool,
    },

    /// List `#` comments line by line
    Comments {
        /// Python file to inspect (`-` for stdin)
        path: PathBuf,
    },

    /// Run every extraction on one file
    Inspect {
        /// Python file to inspect (`-` for stdin)
        path: PathBuf,

        /// Keep docstring indentation as written
        #[arg(long)]
        raw: bool,
    },

    /// Apply a string operation
    Text {
        #[arg(value_enum)]
        operation: TextOperation,

        /// Input text
        text: String,
    },

    /// Initialize a .pyinspect.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["pyinspect"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pyinspect", "symbols", "main.py", "-f", "json", "-vv"])
            .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.log_level(), "debug");
        assert!(matches!(cli.command, Some(Commands::Symbols { .. })));
    }

    #[test]
    fn test_text_operation_names() {
        let cli = Cli::try_parse_from(["pyinspect", "text", "count-words", "a b"]).unwrap();
        match cli.command {
            Some(Commands::Text { operation, text }) => {
                assert_eq!(operation, TextOperation::CountWords);
                assert_eq!(text, "a b");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
