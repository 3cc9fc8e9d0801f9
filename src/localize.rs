use std::sync::LazyLock;

use i18n_embed::{
    DefaultLocalizer, LanguageLoader, Localizer,
    fluent::{FluentLanguageLoader, fluent_language_loader},
    unic_langid::LanguageIdentifier,
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();

    loader
        .load_fallback_language(&Localizations)
        .expect("Error while loading fallback language");

    loader
});

#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::localize::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::localize::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

// Get the `Localizer` to be used for localizing this library.
pub fn localizer() -> Box<dyn Localizer> {
    Box::from(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}

/// Select the UI language. `locale` wins over the desktop's requested languages.
pub fn localize(locale: Option<&str>) {
    let localizer = localizer();
    let mut requested_languages = Vec::new();
    if let Some(locale) = locale {
        match locale.parse::<LanguageIdentifier>() {
            Ok(language) => requested_languages.push(language),
            Err(err) => log::warn!("ignoring invalid locale {:?}: {}", locale, err),
        }
    }
    requested_languages.extend(i18n_embed::DesktopLanguageRequester::requested_languages());

    if let Err(error) = localizer.select(&requested_languages) {
        log::error!("error while loading language for mars-gallery: {}", error);
    }
}

/// The language currently in use, e.g. `en` or `es`.
pub fn current_language() -> String {
    LANGUAGE_LOADER.current_language().to_string()
}
