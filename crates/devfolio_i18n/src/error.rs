use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("json dictionary error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("yaml dictionary error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid dictionary key `{key}` at `{path}` (allowed: [A-Za-z0-9][A-Za-z0-9_-]*)")]
    InvalidKey { path: String, key: String },

    #[error("dictionary value at `{path}` must be a string, object or array (found {found})")]
    InvalidValue { path: String, found: &'static str },

    #[error("dictionary limit exceeded at `{path}`: {msg}")]
    Limit { path: String, msg: String },

    #[error("dictionary root must be an object")]
    NotAnObject,

    #[error("invalid locale code `{code}`: {reason}")]
    InvalidLocale { code: String, reason: String },

    #[error("locale `{0}` is registered twice")]
    DuplicateLocale(String),

    #[error("default locale `{0}` is not in the supported set")]
    DefaultNotSupported(String),

    #[error("no supported locales registered")]
    NoLocales,

    #[error("locale `{0}` is not supported")]
    UnsupportedLocale(String),

    #[error("no dictionary loaded for locale `{0}`")]
    MissingDictionary(String),
}
