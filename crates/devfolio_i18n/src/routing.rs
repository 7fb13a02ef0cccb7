//! Locale-prefixed paths (`/en/projects`) and `hreflang` alternates.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::locale::LocaleRegistry;

/// `hreflang` key that points at the default locale.
pub const X_DEFAULT: &str = "x-default";

/// The locale encoded in the first path segment, if it is a supported one.
pub fn locale_from_path<'r>(path: &str, registry: &'r LocaleRegistry) -> Option<&'r str> {
    locale_prefix(path, registry).map(|(code, _)| code)
}

/// Matched locale code and the raw first segment it came from.
///
/// Segments with surrounding whitespace never match.
fn locale_prefix<'p, 'r>(
    path: &'p str,
    registry: &'r LocaleRegistry,
) -> Option<(&'r str, &'p str)> {
    let segment = path.trim_start_matches('/').split(['/', '?', '#']).next()?;
    if segment.is_empty() || segment.trim() != segment {
        return None;
    }
    registry.get(segment).map(|info| (info.code.as_str(), segment))
}

/// Prefix `path` with `locale`, replacing an existing supported prefix.
///
/// - `/projects` -> `/en/projects`
/// - `/es/projects` -> `/en/projects`
/// - `/` -> `/en`
pub fn localized_path(locale: &str, path: &str, registry: &LocaleRegistry) -> String {
    let trimmed = path.trim_start_matches('/');
    let rest = match locale_prefix(path, registry) {
        Some((_, segment)) => &trimmed[segment.len()..],
        None if trimmed.is_empty() => "",
        None => return format!("/{locale}/{trimmed}"),
    };
    let rest = rest.trim_start_matches('/');
    if rest.is_empty() {
        format!("/{locale}")
    } else {
        format!("/{locale}/{rest}")
    }
}

/// Canonical and per-locale URLs for one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alternates {
    pub canonical: String,
    /// One entry per supported locale plus [`X_DEFAULT`].
    pub languages: BTreeMap<String, String>,
}

/// Absolute alternate URLs for `path` under `base_url`.
///
/// The canonical URL and `x-default` both point at the default locale.
pub fn alternates(base_url: &str, registry: &LocaleRegistry, path: &str) -> Alternates {
    let base = base_url.trim_end_matches('/');
    let url = |code: &str| format!("{base}{}", localized_path(code, path, registry));

    let mut languages: BTreeMap<String, String> = registry
        .codes()
        .map(|code| (code.to_string(), url(code)))
        .collect();
    let canonical = url(registry.default_locale());
    languages.insert(X_DEFAULT.to_string(), canonical.clone());

    Alternates {
        canonical,
        languages,
    }
}
