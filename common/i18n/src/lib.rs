use std::collections::BTreeMap;
use std::sync::OnceLock;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, error, info, trace};
use unic_langid::{langid, LanguageIdentifier};

/// The languages the storefront ships translations for.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    serde::Serialize,
    serde::Deserialize
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Cn,
    Es,
    De,
}

impl Language {
    pub fn identifier(&self) -> LanguageIdentifier {
        match self {
            Language::En => langid!("en-US"),
            Language::Cn => langid!("zh-CN"),
            Language::Es => langid!("es-ES"),
            Language::De => langid!("de-DE"),
        }
    }

    fn builtin_translations(&self) -> &'static str {
        match self {
            Language::En => include_str!("../assets/translations/en-US/translations.ftl"),
            Language::Cn => include_str!("../assets/translations/zh-CN/translations.ftl"),
            Language::Es => include_str!("../assets/translations/es-ES/translations.ftl"),
            Language::De => include_str!("../assets/translations/de-DE/translations.ftl"),
        }
    }
}

pub struct I18nConfig {
    pub languages: Vec<Language>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            languages: Language::iter().collect(),
        }
    }
}

/// A mapping of language to localized messages.
///
/// Lookups never fail, a key that has no message for the language is returned as-is.
pub struct TranslationTable {
    bundles: BTreeMap<Language, FluentBundle<FluentResource>>,
}

impl TranslationTable {
    /// Load the translations that are compiled into the binary.
    pub fn builtin(config: &I18nConfig) -> Self {
        Self::from_sources(
            config
                .languages
                .iter()
                .map(|language| (*language, language.builtin_translations().to_string())),
        )
    }

    /// Build a table from fluent sources, one per language.
    ///
    /// Entries that fail to parse are logged and skipped, the rest of the source is still used.
    pub fn from_sources(sources: impl IntoIterator<Item = (Language, String)>) -> Self {
        let mut bundles = BTreeMap::new();

        for (language, source) in sources {
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    error!("Error parsing translations. language: {}, errors: {:?}", language, errors);
                    resource
                }
            };

            let mut bundle = FluentBundle::new_concurrent(vec![language.identifier()]);
            // plain output, no unicode isolation marks around placeables.
            bundle.set_use_isolating(false);

            if let Err(errors) = bundle.add_resource(resource) {
                error!("Error adding translations. language: {}, errors: {:?}", language, errors);
            }

            debug!("Loaded translations. language: {}", language);
            bundles.insert(language, bundle);
        }

        Self {
            bundles,
        }
    }

    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.bundles
            .get(&language)
            .is_some_and(|bundle| bundle.has_message(key))
    }

    pub fn tr(&self, language: Language, key: &str) -> String {
        self.format(language, key, None)
    }

    pub fn tr_args(&self, language: Language, key: &str, args: &FluentArgs) -> String {
        self.format(language, key, Some(args))
    }

    fn format(&self, language: Language, key: &str, args: Option<&FluentArgs>) -> String {
        let Some(bundle) = self.bundles.get(&language) else {
            trace!("No translations for language. language: {}, key: {}", language, key);
            return key.to_string();
        };

        let Some(pattern) = bundle
            .get_message(key)
            .and_then(|message| message.value())
        else {
            trace!("No translation. language: {}, key: {}", language, key);
            return key.to_string();
        };

        let mut errors = vec![];
        let value = bundle
            .format_pattern(pattern, args, &mut errors)
            .into_owned();

        if !errors.is_empty() {
            error!("Error formatting translation. language: {}, key: {}, errors: {:?}", language, key, errors);
        }

        value
    }
}

static TRANSLATIONS: OnceLock<TranslationTable> = OnceLock::new();

/// The process-wide table, initialized with all builtin languages on first use.
pub fn translations() -> &'static TranslationTable {
    TRANSLATIONS.get_or_init(|| {
        let config = I18nConfig::default();
        let table = TranslationTable::builtin(&config);
        info!("Loaded translations. languages: {:?}", config.languages);
        table
    })
}

pub fn tr(language: Language, key: &str) -> String {
    translations().tr(language, key)
}

pub fn tr_args(language: Language, key: &str, args: &FluentArgs) -> String {
    translations().tr_args(language, key, args)
}

pub mod fluent_argument_helpers {
    use fluent_bundle::{FluentArgs, FluentValue};

    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug, Clone, Eq)]
    pub enum Arg {
        String(String),
        Integer(i64),
    }

    pub fn build_fluent_args(args: &[(&str, Arg)]) -> FluentArgs<'static> {
        let mut fluent_args = FluentArgs::new();
        for (key, value) in args.iter() {
            match value {
                Arg::String(value) => {
                    fluent_args.set(key.to_string(), FluentValue::from(value.clone()));
                }
                Arg::Integer(value) => {
                    fluent_args.set(key.to_string(), FluentValue::from(*value));
                }
            }
        }
        fluent_args
    }
}
