use std::collections::HashMap;

use tracing::{debug, warn};

use crate::format::interpolate;
use crate::locale::{LocaleInfo, LocaleRegistry};
use crate::message::Message;
use crate::tree::MessageTree;
use crate::I18nError;

/// Immutable translation state: the locale registry plus one dictionary per locale.
///
/// There is no "current locale" here. Callers pick a locale per lookup, or
/// borrow a [`LocaleContext`] and pass it down.
#[derive(Clone, Debug)]
pub struct Translator {
    registry: LocaleRegistry,
    dictionaries: HashMap<String, MessageTree>,
}

impl Translator {
    pub fn new(registry: LocaleRegistry) -> Self {
        Self {
            registry,
            dictionaries: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Install the dictionary for a supported locale, replacing any previous one.
    pub fn load(&mut self, locale: &str, tree: MessageTree) -> Result<(), I18nError> {
        let code = self
            .registry
            .get(locale)
            .map(|info| info.code.clone())
            .ok_or_else(|| I18nError::UnsupportedLocale(locale.to_string()))?;
        debug!(locale = %code, entries = tree.leaves().len(), "loaded message dictionary");
        self.dictionaries.insert(code, tree);
        Ok(())
    }

    /// Parse and load a JSON dictionary for a locale.
    pub fn load_json_str(&mut self, locale: &str, src: &str) -> Result<(), I18nError> {
        let tree = MessageTree::from_json_str(src)?;
        self.load(locale, tree)
    }

    /// Parse and load a YAML dictionary for a locale.
    #[cfg(feature = "yaml")]
    pub fn load_yaml_str(&mut self, locale: &str, src: &str) -> Result<(), I18nError> {
        let tree = MessageTree::from_yaml_str(src)?;
        self.load(locale, tree)
    }

    /// Fails on the first supported locale that has no dictionary.
    pub fn ensure_loaded(&self) -> Result<(), I18nError> {
        match self
            .registry
            .codes()
            .find(|code| !self.dictionaries.contains_key(*code))
        {
            Some(code) => Err(I18nError::MissingDictionary(code.to_string())),
            None => Ok(()),
        }
    }

    pub fn dictionary(&self, locale: &str) -> Option<&MessageTree> {
        let info = self.registry.get(locale)?;
        self.dictionaries.get(&info.code)
    }

    /// Resolve `msg` in `locale`. A missing key resolves to the key itself.
    pub fn translate(&self, locale: &str, msg: &Message) -> String {
        self.locale(locale).tr(msg)
    }

    /// Borrow a locale context for repeated lookups.
    pub fn locale(&self, code: &str) -> LocaleContext<'_> {
        let info = self.registry.get(code);
        let tree = info.and_then(|i| self.dictionaries.get(&i.code));
        if tree.is_none() {
            warn!(locale = %code, "no dictionary for locale, keys will resolve to themselves");
        }
        LocaleContext {
            code: info.map_or_else(|| code.to_string(), |i| i.code.clone()),
            info,
            tree,
            prefix: None,
        }
    }

    /// Context for the best match of an `Accept-Language` header.
    pub fn negotiate(&self, accept_language: &str) -> LocaleContext<'_> {
        let code = self.registry.resolve_accept_language(accept_language);
        self.locale(code)
    }
}

/// A borrowed view of one locale's dictionary, optionally scoped to a namespace.
#[derive(Clone, Debug)]
pub struct LocaleContext<'a> {
    code: String,
    info: Option<&'a LocaleInfo>,
    tree: Option<&'a MessageTree>,
    prefix: Option<String>,
}

impl<'a> LocaleContext<'a> {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn info(&self) -> Option<&'a LocaleInfo> {
        self.info
    }

    /// A view whose keys are relative to `namespace` (`"projects"` + `"cta.viewAll"`).
    pub fn namespace(&self, namespace: &str) -> LocaleContext<'a> {
        LocaleContext {
            code: self.code.clone(),
            info: self.info,
            tree: self.tree,
            prefix: Some(self.full_key(namespace)),
        }
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.to_string(),
        }
    }

    /// The raw template at `key`, before formatting.
    pub fn template(&self, key: &str) -> Option<&'a str> {
        self.tree?.get_text(&self.full_key(key))
    }

    pub fn has(&self, key: &str) -> bool {
        self.template(key).is_some()
    }

    /// Resolve a key with no arguments.
    pub fn t(&self, key: &str) -> String {
        self.tr(&Message::new(key.to_string()))
    }

    /// Resolve a message. Missing keys come back as the full dotted key.
    pub fn tr(&self, msg: &Message) -> String {
        let key = self.full_key(&msg.key);
        match self.tree.and_then(|tree| tree.get_text(&key)) {
            Some(tmpl) => interpolate(tmpl, &msg.args),
            None => {
                debug!(locale = %self.code, key = %key, "missing translation");
                key
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::t;
    use pretty_assertions::assert_eq;

    const ES: &str = r#"{
        "metadata": { "title": "Desarrollador de Software - Portfolio" },
        "projects": { "cta": { "viewAll": "Ver todos" } },
        "interpolation": { "welcome": "¡Bienvenido, {name}!" }
    }"#;
    const EN: &str = r#"{
        "metadata": { "title": "Software Developer - Portfolio" },
        "projects": { "cta": { "viewAll": "View all" } },
        "interpolation": { "welcome": "Welcome, {name}!" }
    }"#;

    fn translator() -> Translator {
        let registry = LocaleRegistry::new(
            vec![
                LocaleInfo::new("es", "Español", "🇪🇸"),
                LocaleInfo::new("en", "English", "🇬🇧"),
            ],
            "es",
        )
        .unwrap();
        let mut tr = Translator::new(registry);
        tr.load_json_str("es", ES).unwrap();
        tr.load_json_str("en", EN).unwrap();
        tr
    }

    #[test]
    fn translates_per_locale() {
        let tr = translator();
        let es = tr.translate("es", &t!("metadata.title"));
        let en = tr.translate("en", &t!("metadata.title"));
        assert_eq!(es, "Desarrollador de Software - Portfolio");
        assert_eq!(en, "Software Developer - Portfolio");
        assert_ne!(es, en);
    }

    #[test]
    fn missing_keys_resolve_to_themselves() {
        let tr = translator();
        assert_eq!(tr.translate("en", &t!("metadata.nope")), "metadata.nope");
        // A branch is not a leaf.
        assert_eq!(tr.translate("en", &t!("metadata")), "metadata");
        assert_eq!(tr.locale("fr").t("metadata.title"), "metadata.title");
    }

    #[test]
    fn namespaces_prefix_keys() {
        let tr = translator();
        let projects = tr.locale("en").namespace("projects");
        assert_eq!(projects.t("cta.viewAll"), "View all");
        assert_eq!(projects.t("cta.missing"), "projects.cta.missing");
        assert!(projects.namespace("cta").has("viewAll"));
    }

    #[test]
    fn interpolates_arguments() {
        let tr = translator();
        let s = tr.translate("es", &t!("interpolation.welcome", { name: "Ana" }));
        assert_eq!(s, "¡Bienvenido, Ana!");
        let s = tr.translate("es", &t!("interpolation.welcome"));
        assert_eq!(s, "¡Bienvenido, {name}!");
    }

    #[test]
    fn negotiates_from_header() {
        let tr = translator();
        assert_eq!(tr.negotiate("fr, en;q=0.8").code(), "en");
        assert_eq!(tr.negotiate("").code(), "es");
        assert_eq!(tr.locale("EN").code(), "en");
    }

    #[test]
    fn load_rejects_unsupported_locales() {
        let mut tr = translator();
        assert!(matches!(
            tr.load_json_str("fr", "{}"),
            Err(I18nError::UnsupportedLocale(_))
        ));
        assert!(tr.ensure_loaded().is_ok());

        let fresh = Translator::new(tr.registry().clone());
        assert!(matches!(
            fresh.ensure_loaded(),
            Err(I18nError::MissingDictionary(code)) if code == "es"
        ));
    }
}
