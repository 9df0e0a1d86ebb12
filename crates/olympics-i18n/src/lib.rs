//! Label localization for the Olympics dashboard
//!
//! Chart titles, axis labels, legends and page headings are Fluent messages
//! bundled for `en-US` (default) and `sv-SE`.
//!
//! ```rust
//! use olympics_i18n::{Locale, Localizer};
//!
//! let localizer = Localizer::new(Locale::English).unwrap();
//! let title = localizer.text_with("efficiency-title", &[
//!     ("country", "Germany".to_string()),
//!     ("sport", "Ski Jumping".to_string()),
//! ]);
//! assert_eq!(title, "Germany - Medal Efficiency in Ski Jumping");
//! ```

pub mod bundle;
pub mod error;
pub mod locale;
pub mod localizer;

pub use bundle::{fluent_args, BundleManager};
pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use localizer::Localizer;
