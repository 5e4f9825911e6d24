// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod inspector;
pub mod io;
pub mod text;

// Re-export commonly used types
pub use crate::errors::{Error, Result};

pub use crate::inspector::{
    extract_comments, extract_docstrings, extract_docstrings_with, inspect, parse_code,
    DocstringStyle, InspectionReport, SymbolTable,
};

pub use crate::text::{capitalize, count_words, is_palindrome, reverse};
