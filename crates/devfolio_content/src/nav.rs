//! Header navigation and the language switcher.

use devfolio_i18n::{t, LocaleContext, LocaleInfo, Translator};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub slug: &'static str,
    /// In-page anchor.
    pub href: &'static str,
}

impl NavItem {
    pub fn label_key(&self) -> String {
        format!("nav.{}", self.slug)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        slug: "solutions",
        href: "#services",
    },
    NavItem {
        slug: "projects",
        href: "#projects",
    },
    NavItem {
        slug: "stack",
        href: "#stack",
    },
    NavItem {
        slug: "journey",
        href: "#journey",
    },
];

/// One entry of the language switcher as rendered in `ctx`'s locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub active: bool,
    /// Accessible label, e.g. "Switch to English".
    pub label: String,
}

pub fn language_options(translator: &Translator, ctx: &LocaleContext<'_>) -> Vec<LanguageOption> {
    translator
        .registry()
        .locales()
        .iter()
        .map(|info: &LocaleInfo| LanguageOption {
            code: info.code.clone(),
            name: info.name.clone(),
            flag: info.flag.clone(),
            active: info.code == ctx.code(),
            label: ctx.tr(&t!("languageSwitcher.label", { language: info.name.clone() })),
        })
        .collect()
}
