use crate::config::Config;
use clap::Parser;
use cosmic::cosmic_config;

#[derive(Debug, Default, Parser)]
#[command(version, about = "Browse photographs taken by the Curiosity rover")]
pub struct Cli {
    /// UI language for this session, e.g. `en` or `es`
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Flags {
    pub config_handler: Option<cosmic_config::Config>,
    pub config: Config,
    pub locale_override: Option<String>,
}
