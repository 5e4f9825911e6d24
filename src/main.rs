use anyhow::Result;
use clap::Parser;
use pyinspect::cli::{Cli, Commands};
use pyinspect::commands::inspect::{run_inspect, Extraction, InspectConfig};
use pyinspect::commands::{init, text, BANNER};
use pyinspect::config::{load_config, PyinspectConfig};
use pyinspect::inspector::DocstringStyle;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let config = load_config();
    let format = cli.format.unwrap_or_else(|| config.output_format());
    let stdout = std::io::stdout();

    match cli.command {
        None => {
            println!("{BANNER}");
            Ok(())
        }
        Some(Commands::Symbols { path }) => run_inspect(
            &inspect_config(path, Extraction::Symbols, false, &config, format),
            stdout,
        ),
        Some(Commands::Docstrings { path, raw }) => run_inspect(
            &inspect_config(path, Extraction::Docstrings, raw, &config, format),
            stdout,
        ),
        Some(Commands::Comments { path }) => run_inspect(
            &inspect_config(path, Extraction::Comments, false, &config, format),
            stdout,
        ),
        Some(Commands::Inspect { path, raw }) => run_inspect(
            &inspect_config(path, Extraction::All, raw, &config, format),
            stdout,
        ),
        Some(Commands::Text {
            operation,
            text: input,
        }) => text::run_text(operation, &input, format, stdout),
        Some(Commands::Init { force }) => {
            let path = init::init_config(force)?;
            println!("Created {}", path.display());
            Ok(())
        }
    }
}

// RUST_LOG wins over the -v flags when set
fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn inspect_config(
    path: std::path::PathBuf,
    extraction: Extraction,
    raw: bool,
    config: &PyinspectConfig,
    format: pyinspect::io::OutputFormat,
) -> InspectConfig {
    let docstring_style = if raw {
        DocstringStyle::Raw
    } else {
        config.docstring_style()
    };

    InspectConfig {
        path,
        extraction,
        format,
        docstring_style,
    }
}
