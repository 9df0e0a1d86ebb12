//! Label lookup with fallback to the default locale

use crate::bundle::{fluent_args, BundleManager};
use crate::error::I18nResult;
use crate::Locale;
use tracing::{info, warn};

/// Resolves chart and page labels for one active locale.
///
/// Lookups that miss in the active locale fall back to en-US, then to the
/// message id itself, so a label is always produced.
#[derive(Debug)]
pub struct Localizer {
    locale: Locale,
    bundles: BundleManager,
}

impl Localizer {
    /// Load every bundled locale and activate `locale`
    pub fn new(locale: Locale) -> I18nResult<Self> {
        let mut bundles = BundleManager::new();
        for candidate in Locale::all() {
            bundles.add_source(candidate, candidate.resource_source())?;
        }
        info!(locale = %locale, "Localizer initialized");
        Ok(Self { locale, bundles })
    }

    /// Parse a locale code and build a localizer for it
    pub fn for_code(code: &str) -> I18nResult<Self> {
        Self::new(code.parse()?)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Label without arguments
    pub fn text(&self, id: &str) -> String {
        self.text_with(id, &[])
    }

    /// Label with string arguments
    pub fn text_with(&self, id: &str, args: &[(&str, String)]) -> String {
        let fluent = fluent_args(args);
        let args = (!args.is_empty()).then_some(&fluent);

        match self.bundles.format_message(self.locale, id, args) {
            Ok(text) => return text,
            Err(e) if self.locale != Locale::default() => {
                warn!(id, locale = %self.locale, error = %e, "Falling back to default locale");
            }
            Err(e) => warn!(id, error = %e, "Missing label"),
        }

        if self.locale != Locale::default() {
            if let Ok(text) = self.bundles.format_message(Locale::default(), id, args) {
                return text;
            }
        }

        id.to_string()
    }

    pub fn has_message(&self, id: &str) -> bool {
        self.bundles.has_message(self.locale, id)
    }
}
