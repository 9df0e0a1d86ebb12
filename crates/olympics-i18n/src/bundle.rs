//! Fluent bundle management and message formatting

use crate::error::{I18nError, I18nResult};
use crate::Locale;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use tracing::{debug, warn};

/// One Fluent bundle per loaded locale
#[derive(Default)]
pub struct BundleManager {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for BundleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleManager")
            .field("locales", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl BundleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `source` and add it to the bundle for `locale`
    pub fn add_source(&mut self, locale: Locale, source: &str) -> I18nResult<()> {
        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            I18nError::FluentParseError {
                locale: locale.code().to_string(),
                errors: errors.iter().map(|e| format!("{e:?}")).collect(),
            }
        })?;

        let lang_id = locale.to_language_identifier()?;
        let bundle = self.bundles.entry(locale).or_insert_with(|| {
            let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);
            // Plain labels: no Unicode isolation marks around placeables.
            bundle.set_use_isolating(false);
            bundle
        });

        bundle
            .add_resource(resource)
            .map_err(|errors| I18nError::BundleCreationError {
                locale: locale.code().to_string(),
                errors: errors.iter().map(|e| format!("{e:?}")).collect(),
            })?;

        debug!(locale = %locale, "Added Fluent resource");
        Ok(())
    }

    /// Format a message with the given arguments
    pub fn format_message(
        &self,
        locale: Locale,
        message_id: &str,
        args: Option<&FluentArgs>,
    ) -> I18nResult<String> {
        let not_found = || I18nError::MessageNotFound {
            key: message_id.to_string(),
        };

        let bundle = self.bundles.get(&locale).ok_or_else(not_found)?;
        let pattern = bundle
            .get_message(message_id)
            .and_then(|message| message.value())
            .ok_or_else(not_found)?;

        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            let errors: Vec<String> = errors.iter().map(|e| format!("{e:?}")).collect();
            warn!(message_id, ?errors, "Formatting errors");
            return Err(I18nError::MessageFormatError {
                key: message_id.to_string(),
                errors,
            });
        }

        Ok(formatted.into_owned())
    }

    pub fn has_message(&self, locale: Locale, message_id: &str) -> bool {
        self.bundles
            .get(&locale)
            .is_some_and(|bundle| bundle.has_message(message_id))
    }
}

/// Build Fluent arguments from string pairs
pub fn fluent_args<'a>(args: &'a [(&'a str, String)]) -> FluentArgs<'a> {
    let mut fluent_args = FluentArgs::new();
    for (key, value) in args {
        fluent_args.set(*key, value.as_str());
    }
    fluent_args
}
