pub mod cli;
pub mod config;

pub use cli::{build_cli_command, ChartKind, Cli, Commands, DataArgs, OutputFormat, SelectionArgs};
pub use config::{load_config, GppConfig};
