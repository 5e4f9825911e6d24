pub mod init;
pub mod inspect;
pub mod text;

/// Printed when the binary runs without a subcommand
pub const BANNER: &str = "Python project loaded";
