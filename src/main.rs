// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;

mod constants;

mod feed;

mod navigation;

mod pages;

mod photo;

mod ui;

use cosmic::{
    Application,
    app::Settings,
    cosmic_config::{self, CosmicConfigEntry},
    iced::Limits,
};

mod cli;
use cli::{Cli, Flags};

use config::{CONFIG_VERSION, Config, ScreenConfig};
mod config;

mod localize;

mod scroll_context;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let (config_handler, config) =
        match cosmic_config::Config::new(app::App::APP_ID, CONFIG_VERSION) {
            Ok(config_handler) => {
                let config = match Config::get_entry(&config_handler) {
                    Ok(ok) => ok,
                    Err((errs, config)) => {
                        log::info!("errors loading config: {:?}", errs);
                        config
                    }
                };
                (Some(config_handler), config)
            }
            Err(err) => {
                log::error!("failed to create config handler: {}", err);
                (None, Config::default())
            }
        };

    localize::localize(ScreenConfig::requested_locale(&config, cli.locale.as_deref()));

    let mut settings = Settings::default();
    settings = settings.theme(config.app_theme.theme());
    settings = settings.size_limits(Limits::NONE.min_width(360.0).min_height(300.0));

    let flags = Flags {
        config_handler,
        config,
        locale_override: cli.locale,
    };

    cosmic::app::run::<app::App>(settings, flags)?;

    Ok(())
}

mod message;
pub use message::Message;

mod app;
