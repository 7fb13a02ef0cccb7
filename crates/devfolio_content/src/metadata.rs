use devfolio_i18n::{alternates, Alternates, Translator};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub locale: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Head metadata for the localized home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub locale: String,
    pub title: String,
    pub description: String,
    pub open_graph: OpenGraph,
    pub alternates: Alternates,
}

impl PageMetadata {
    /// Build from the `metadata` namespace of `locale`.
    ///
    /// An unsupported `locale` falls back to the registry default.
    pub fn build(translator: &Translator, locale: &str, base_url: &str) -> Self {
        let registry = translator.registry();
        let code = registry
            .get(locale)
            .map_or_else(|| registry.default_locale(), |info| info.code.as_str());
        let meta = translator.locale(code).namespace("metadata");
        let alternates = alternates(base_url, registry, "/");
        let url = alternates
            .languages
            .get(code)
            .cloned()
            .unwrap_or_else(|| alternates.canonical.clone());

        Self {
            locale: code.to_string(),
            title: meta.t("title"),
            description: meta.t("description"),
            open_graph: OpenGraph {
                title: meta.t("openGraph.title"),
                description: meta.t("openGraph.description"),
                site_name: meta.t("openGraph.siteName"),
                locale: code.to_string(),
                url,
                kind: "website",
            },
            alternates,
        }
    }
}
