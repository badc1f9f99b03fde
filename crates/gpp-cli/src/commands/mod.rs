use anyhow::Result;
use gpp_cli::{Cli, Commands, GppConfig};

pub mod aggregate;
pub mod chart;
pub mod completions;
pub mod export;
pub mod inspect;
#[cfg(feature = "server")]
pub mod serve;
pub mod util;

pub fn dispatch(cli: &Cli, config: &GppConfig) -> Result<()> {
    match &cli.command {
        Commands::Summary { data, format } => inspect::summary(&util::load(data, config)?, *format),
        Commands::Countries { data, format } => {
            inspect::countries(&util::load(data, config)?, *format)
        }
        Commands::Ranking {
            data,
            selection,
            format,
        } => aggregate::ranking(
            &util::load(data, config)?,
            util::selected_country(selection, config),
            *format,
        ),
        Commands::FuelShare {
            data,
            selection,
            format,
        } => aggregate::fuel_share(
            &util::load(data, config)?,
            util::selected_country(selection, config),
            *format,
        ),
        Commands::Distribution {
            data,
            selection,
            format,
        } => aggregate::distribution(
            &util::load(data, config)?,
            util::selected_country(selection, config),
            *format,
        ),
        Commands::Choropleth { data, format } => {
            aggregate::choropleth(&util::load(data, config)?, *format)
        }
        Commands::Chart {
            data,
            kind,
            selection,
            out,
        } => chart::handle(
            &util::load(data, config)?,
            *kind,
            util::selected_country(selection, config),
            out.as_deref(),
        ),
        Commands::Export {
            data,
            selection,
            out_dir,
        } => export::handle(
            &util::load(data, config)?,
            util::selected_country(selection, config),
            out_dir,
        ),
        #[cfg(feature = "server")]
        Commands::Serve {
            data,
            addr,
            default_country,
        } => serve::handle(
            util::load(data, config)?,
            addr.unwrap_or(config.dashboard.addr),
            default_country
                .as_deref()
                .unwrap_or(&config.dashboard.default_country),
        ),
        Commands::Completions { shell, out } => completions::handle(*shell, out.as_deref()),
    }
}
