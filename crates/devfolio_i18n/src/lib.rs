//! devfolio internationalization (i18n)
//!
//! - A fixed [`LocaleRegistry`] of supported locales with one default, and
//!   [`resolve_locale`] to map a client's language preferences onto it.
//! - Nested message dictionaries ([`MessageTree`]) loaded from JSON or YAML,
//!   addressed by dotted keys (`projects.items.defi.title`).
//! - [`Translator`] / [`LocaleContext`] for lookups with `{placeholder}`
//!   interpolation and ICU-style plural blocks. A missing key resolves to
//!   the key itself so gaps show up in the rendered page.
//! - [`check_completeness`] to verify every locale carries the same keys.

mod completeness;
mod error;
mod format;
mod locale;
mod message;
mod routing;
mod translator;
mod tree;

pub use completeness::{check_completeness, check_trees, CompletenessIssue, CompletenessReport};
pub use error::I18nError;
pub use format::{interpolate, placeholders};
pub use locale::{
    base_language, normalize_locale, parse_accept_language, resolve_locale, LocaleInfo,
    LocaleRegistry,
};
pub use message::{ArgValue, Message};
pub use routing::{alternates, locale_from_path, localized_path, Alternates, X_DEFAULT};
pub use translator::{LocaleContext, Translator};
pub use tree::{MessageNode, MessageTree, Shape};

/// Convenience macro for building a translation key + args as a [`Message`].
///
/// Examples:
/// - `t!("metadata.title")`
/// - `t!("interpolation.greeting", { name: user_name, count: 3 })`
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::Message::new($key)
    };
    ($key:literal, { $($name:ident : $value:expr),* $(,)? }) => {{
        let mut m = $crate::Message::new($key);
        $(
            m = m.arg(stringify!($name), $value);
        )*
        m
    }};
}
