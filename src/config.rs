use cosmic::{
    cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry},
    theme,
};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u64 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum AppTheme {
    Dark,
    Light,
    System,
}

impl AppTheme {
    pub fn theme(&self) -> theme::Theme {
        match self {
            Self::Dark => {
                let mut t = theme::system_dark();
                t.theme_type.prefer_dark(Some(true));
                t
            }
            Self::Light => {
                let mut t = theme::system_light();
                t.theme_type.prefer_dark(Some(false));
                t
            }
            Self::System => theme::system_preference(),
        }
    }
}

#[derive(Clone, CosmicConfigEntry, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Config {
    pub app_theme: AppTheme,
    /// UI language, `None` follows the desktop
    pub locale: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::System,
            locale: None,
        }
    }
}

/// Presentation settings shared by both pages.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScreenConfig {
    pub locale: String,
    pub theme: AppTheme,
}

impl ScreenConfig {
    pub fn new(config: &Config, locale_override: Option<&str>, current_language: String) -> Self {
        Self {
            locale: locale_override
                .map(str::to_string)
                .or_else(|| config.locale.clone())
                .unwrap_or(current_language),
            theme: config.app_theme,
        }
    }

    /// Locale to request at startup, before any bundle is selected.
    pub fn requested_locale<'a>(
        config: &'a Config,
        locale_override: Option<&'a str>,
    ) -> Option<&'a str> {
        locale_override.or(config.locale.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_locale_wins_over_config() {
        let config = Config {
            app_theme: AppTheme::Dark,
            locale: Some("en".to_string()),
        };
        let screen = ScreenConfig::new(&config, Some("es"), "fr".to_string());
        assert_eq!(screen.locale, "es");
        assert_eq!(screen.theme, AppTheme::Dark);
        assert_eq!(ScreenConfig::requested_locale(&config, Some("es")), Some("es"));
    }

    #[test]
    fn falls_back_to_current_language() {
        let config = Config::default();
        let screen = ScreenConfig::new(&config, None, "en".to_string());
        assert_eq!(screen.locale, "en");
        assert_eq!(screen.theme, AppTheme::System);
        assert_eq!(ScreenConfig::requested_locale(&config, None), None);
    }
}
