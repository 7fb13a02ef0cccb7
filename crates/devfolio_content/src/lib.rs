//! devfolio site content
//!
//! The Spanish and English dictionaries are compiled into the crate and
//! loaded by [`bundled_translator`]. The static catalog (projects, skills,
//! services, stats, tech badges, social links, navigation) holds structure
//! and translation keys only; keys are derived from each entry's slug.

mod metadata;
mod nav;
mod project;
mod service;
mod skill;
mod social;
mod stat;
mod tech;

use devfolio_i18n::{I18nError, LocaleInfo, LocaleRegistry, Translator};
use tracing::debug;

pub use metadata::{OpenGraph, PageMetadata};
pub use nav::{language_options, LanguageOption, NavItem, NAV_ITEMS};
pub use project::{
    project, CaseStudy, Capability, LocalizedProject, LocalizedTech, Project, ProjectVariant,
    Section, PROJECTS,
};
pub use service::{Service, ServiceSize, SERVICES};
pub use skill::{skills_in, Skill, SkillCategory, SKILLS};
pub use social::{SocialLink, SOCIAL_LINKS};
pub use stat::{HeroStat, HERO_STATS};
pub use tech::{icons_for, tech, Tech, TECH_STACK};

pub const DEFAULT_LOCALE: &str = "es";
pub const DEFAULT_BASE_URL: &str = "https://devportfolio.com";

/// `(locale, JSON source)` of every bundled dictionary.
pub const BUNDLED_MESSAGES: &[(&str, &str)] = &[
    ("es", include_str!("../messages/es.json")),
    ("en", include_str!("../messages/en.json")),
];

pub fn locales() -> Vec<LocaleInfo> {
    vec![
        LocaleInfo::new("es", "Español", "🇪🇸"),
        LocaleInfo::new("en", "English", "🇺🇸"),
    ]
}

/// The site's locales with `default` as the fallback.
pub fn registry(default: &str) -> Result<LocaleRegistry, I18nError> {
    LocaleRegistry::new(locales(), default)
}

/// A translator with both bundled dictionaries loaded.
pub fn bundled_translator() -> Result<Translator, I18nError> {
    bundled_translator_with_default(DEFAULT_LOCALE)
}

pub fn bundled_translator_with_default(default: &str) -> Result<Translator, I18nError> {
    let mut translator = Translator::new(registry(default)?);
    for (locale, src) in BUNDLED_MESSAGES {
        translator.load_json_str(locale, src)?;
    }
    debug!(
        default_locale = default,
        locales = BUNDLED_MESSAGES.len(),
        "bundled dictionaries loaded"
    );
    Ok(translator)
}

/// Every static translation key the catalog refers to.
///
/// List-valued subtrees (case-study bullets) are enumerated at resolve
/// time and are not included.
pub fn catalog_keys() -> Vec<String> {
    let mut keys = Vec::new();
    for p in PROJECTS {
        keys.push(p.title_key());
        keys.push(p.description_key());
        keys.extend(p.category_key());
        keys.extend(p.stat_key());
        if let Some(cs) = p.case_study_key() {
            for field in [
                "title",
                "problem",
                "problemSection.title",
                "problemSection.description",
                "solutionSection.title",
                "solutionSection.description",
                "capabilitiesSection.title",
            ] {
                keys.push(format!("{cs}.{field}"));
            }
        }
        keys.extend(icons_for(p.tech_stack).iter().map(|t| t.alt_key()));
    }
    keys.extend(SKILLS.iter().map(Skill::name_key));
    keys.extend(SkillCategory::ALL.iter().map(|c| c.label_key()));
    for s in SERVICES {
        keys.push(s.title_key());
        keys.push(s.description_key());
    }
    for s in HERO_STATS {
        keys.push(s.value_key());
        keys.push(s.label_key());
    }
    keys.extend(TECH_STACK.iter().map(Tech::alt_key));
    keys.extend(NAV_ITEMS.iter().map(NavItem::label_key));
    keys.sort();
    keys.dedup();
    keys
}
