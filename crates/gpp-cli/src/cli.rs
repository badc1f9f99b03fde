use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;
#[cfg(feature = "server")]
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gpp",
    author,
    version,
    about = "Global power plant dashboard and aggregation tools",
    long_about = None
)]
pub struct Cli {
    /// Set the logging level (overrides the config file)
    #[arg(long, global = true)]
    pub log_level: Option<tracing::Level>,

    /// Path to a TOML config file
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Threading hint (`auto` or integer)
    #[arg(long, global = true, default_value = "auto")]
    pub threads: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Plant dataset (CSV); defaults to `[data] path` from the config
    #[arg(value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Country name, matched exactly; defaults to `[dashboard] default_country`
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Ranking,
    FuelShare,
    Distribution,
    Choropleth,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Headline numbers: countries, plants, fuel types
    Summary {
        #[command(flatten)]
        data: DataArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// List the selectable country names
    Countries {
        #[command(flatten)]
        data: DataArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Ten largest plants of a country
    Ranking {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Plant counts per fuel type for a country
    FuelShare {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Capacity distribution per fuel for a country (plants under 3000 MW)
    Distribution {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Plant counts per country and start year
    Choropleth {
        #[command(flatten)]
        data: DataArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Emit a Plotly figure as JSON
    Chart {
        #[command(flatten)]
        data: DataArgs,
        /// Which chart to build
        #[arg(long, value_enum)]
        kind: ChartKind,
        #[command(flatten)]
        selection: SelectionArgs,
        /// Write output to a file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },
    /// Write every aggregate to CSV files
    Export {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        /// Output directory (created if missing)
        #[arg(long, value_hint = ValueHint::DirPath)]
        out_dir: PathBuf,
    },
    /// Serve the interactive dashboard over HTTP
    #[cfg(feature = "server")]
    Serve {
        #[command(flatten)]
        data: DataArgs,
        /// Address to bind; defaults to `[dashboard] addr`
        #[arg(long)]
        addr: Option<SocketAddr>,
        /// Initially selected country; defaults to `[dashboard] default_country`
        #[arg(long)]
        default_country: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli_command().debug_assert();
    }

    #[test]
    fn test_parses_country_and_format() {
        let cli = Cli::parse_from([
            "gpp",
            "ranking",
            "plants.csv",
            "--country",
            "Kenya",
            "--format",
            "json",
        ]);
        match cli.command {
            Commands::Ranking {
                data,
                selection,
                format,
            } => {
                assert_eq!(data.data, Some(PathBuf::from("plants.csv")));
                assert_eq!(selection.country.as_deref(), Some("Kenya"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_chart_kind_is_kebab_case() {
        let cli = Cli::parse_from(["gpp", "chart", "--kind", "fuel-share"]);
        assert!(matches!(
            cli.command,
            Commands::Chart {
                kind: ChartKind::FuelShare,
                ..
            }
        ));
    }

    #[test]
    fn test_global_log_level_after_subcommand() {
        let cli = Cli::parse_from(["gpp", "summary", "--log-level", "debug"]);
        assert_eq!(cli.log_level, Some(tracing::Level::DEBUG));
        assert_eq!(cli.threads, "auto");
    }
}
