use serde::Serialize;
use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::I18nError;

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (`en_US` is common in environment variables).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

/// Base language of a tag: drops any `;q=` parameter and region suffix, lower-cased.
///
/// - `en-US` -> `en`
/// - `ES;q=0.8` -> `es`
pub fn base_language(tag: &str) -> String {
    let tag = tag.split(';').next().unwrap_or_default();
    let tag = normalize_locale(tag);
    tag.split('-').next().unwrap_or_default().to_ascii_lowercase()
}

/// Split an `Accept-Language` header into its tags, in header order.
///
/// Quality parameters are dropped, not used for reordering.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    header
        .split(',')
        .filter_map(|part| {
            let tag = part.split(';').next()?.trim();
            if tag.is_empty() {
                None
            } else {
                Some(tag.to_ascii_lowercase())
            }
        })
        .collect()
}

/// Pick the first preference whose base language is supported, else `default`.
///
/// Matching is case-insensitive and only ever compares base languages.
pub fn resolve_locale<'a, I, S>(preferences: I, supported: &'a [S], default: &'a str) -> &'a str
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: AsRef<str>,
{
    for pref in preferences {
        let pref: &str = pref.as_ref();
        let base = base_language(pref);
        if base.is_empty() {
            continue;
        }
        for code in supported {
            let code: &'a str = code.as_ref();
            if code.eq_ignore_ascii_case(&base) {
                debug!(preference = %pref, locale = %code, "resolved locale preference");
                return code;
            }
        }
    }
    debug!(locale = %default, "no supported preference, using default locale");
    default
}

/// One supported locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
    pub code: String,
    pub name: String,
    pub flag: String,
}

impl LocaleInfo {
    pub fn new(code: impl Into<String>, name: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            flag: flag.into(),
        }
    }
}

impl AsRef<str> for LocaleInfo {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

/// The fixed set of supported locales plus the designated default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: Vec<LocaleInfo>,
    default: usize,
}

fn validate_code(code: &str) -> Result<(), I18nError> {
    let invalid = |reason: String| I18nError::InvalidLocale {
        code: code.to_string(),
        reason,
    };
    let langid: LanguageIdentifier = code.parse().map_err(|e| invalid(format!("{e}")))?;
    if langid.script.is_some() || langid.region.is_some() || langid.variants().next().is_some() {
        return Err(invalid("expected a bare language subtag".to_string()));
    }
    if langid.language.as_str() != code {
        return Err(invalid(format!(
            "expected canonical form `{}`",
            langid.language.as_str()
        )));
    }
    Ok(())
}

impl LocaleRegistry {
    /// Build a registry. Fails if a code is invalid or duplicated, or if
    /// `default` is not one of `locales`.
    pub fn new(locales: Vec<LocaleInfo>, default: &str) -> Result<Self, I18nError> {
        if locales.is_empty() {
            return Err(I18nError::NoLocales);
        }
        for (i, info) in locales.iter().enumerate() {
            validate_code(&info.code)?;
            if locales[..i].iter().any(|prev| prev.code == info.code) {
                return Err(I18nError::DuplicateLocale(info.code.clone()));
            }
        }
        let default = locales
            .iter()
            .position(|l| l.code == default)
            .ok_or_else(|| I18nError::DefaultNotSupported(default.to_string()))?;
        Ok(Self { locales, default })
    }

    /// Same locales, different default.
    pub fn with_default(self, default: &str) -> Result<Self, I18nError> {
        Self::new(self.locales, default)
    }

    pub fn default_locale(&self) -> &str {
        &self.locales[self.default].code
    }

    pub fn default_info(&self) -> &LocaleInfo {
        &self.locales[self.default]
    }

    pub fn locales(&self) -> &[LocaleInfo] {
        &self.locales
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.locales.iter().map(|l| l.code.as_str())
    }

    pub fn get(&self, code: &str) -> Option<&LocaleInfo> {
        self.locales
            .iter()
            .find(|l| l.code.eq_ignore_ascii_case(code.trim()))
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn resolve<I>(&self, preferences: I) -> &str
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        resolve_locale(preferences, &self.locales, self.default_locale())
    }

    pub fn resolve_accept_language(&self, header: &str) -> &str {
        self.resolve(parse_accept_language(header))
    }
}
