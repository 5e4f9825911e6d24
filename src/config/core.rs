use serde::{Deserialize, Serialize};

use crate::inspector::DocstringStyle;
use crate::io::output::OutputFormat;

/// Root configuration structure for pyinspect
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PyinspectConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Docstring extraction configuration
    #[serde(default)]
    pub docstrings: Option<DocstringConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocstringConfig {
    /// Normalize indentation the way Python's `inspect.cleandoc` does
    #[serde(default = "default_clean")]
    pub clean: bool,
}

impl Default for DocstringConfig {
    fn default() -> Self {
        Self {
            clean: default_clean(),
        }
    }
}

fn default_clean() -> bool {
    true
}

impl PyinspectConfig {
    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .map(|output| output.format)
            .unwrap_or_default()
    }

    pub fn docstring_style(&self) -> DocstringStyle {
        let clean = self
            .docstrings
            .as_ref()
            .map_or_else(default_clean, |docstrings| docstrings.clean);
        if clean {
            DocstringStyle::Clean
        } else {
            DocstringStyle::Raw
        }
    }
}

/// Contents written by `pyinspect init`
pub const DEFAULT_CONFIG: &str = r#"# pyinspect configuration

[output]
# "terminal" or "json"
format = "terminal"

[docstrings]
# Strip common indentation and blank edges from docstrings
clean = true
"#;
