//! Checks on the bundled dictionaries and the catalog that references them.

use devfolio_content::{
    bundled_translator, bundled_translator_with_default, catalog_keys, language_options,
    skills_in, LocalizedProject, PageMetadata, ProjectVariant, SkillCategory, DEFAULT_BASE_URL,
    HERO_STATS, SERVICES, SOCIAL_LINKS,
};
use devfolio_i18n::{check_completeness, t, X_DEFAULT};
use pretty_assertions::assert_eq;

#[test]
fn bundled_dictionaries_are_complete() {
    let tr = bundled_translator().unwrap();
    tr.ensure_loaded().unwrap();
    let report = check_completeness(&tr);
    assert!(report.is_complete(), "{report}");
}

#[test]
fn every_catalog_key_resolves_in_every_locale() {
    let tr = bundled_translator().unwrap();
    let keys = catalog_keys();
    assert!(keys.len() > 40);
    for code in tr.registry().codes() {
        let ctx = tr.locale(code);
        for key in &keys {
            let value = ctx.t(key);
            assert_ne!(&value, key, "{code}: {key} is missing");
            assert!(!value.trim().is_empty(), "{code}: {key} is empty");
        }
    }
}

#[test]
fn metadata_title_differs_per_locale() {
    let tr = bundled_translator().unwrap();
    let es = tr.translate("es", &t!("metadata.title"));
    let en = tr.translate("en", &t!("metadata.title"));
    assert_eq!(es, "Desarrollador de Software - Portfolio");
    assert_eq!(en, "Software Developer - Portfolio");
}

#[test]
fn page_metadata_for_english() {
    let tr = bundled_translator().unwrap();
    let meta = PageMetadata::build(&tr, "en", DEFAULT_BASE_URL);
    assert_eq!(meta.locale, "en");
    assert_eq!(
        meta.description,
        "Senior Software Engineer specializing in scalable architectures, AI, and Full-Stack development"
    );
    assert_eq!(meta.open_graph.site_name, "DevPortfolio");
    assert_eq!(meta.open_graph.url, "https://devportfolio.com/en");
    assert_eq!(meta.alternates.canonical, "https://devportfolio.com/es");
    assert_eq!(meta.alternates.languages[X_DEFAULT], "https://devportfolio.com/es");

    let json = serde_json::to_value(&meta).unwrap();
    assert_eq!(json["openGraph"]["siteName"], "DevPortfolio");
    assert_eq!(json["openGraph"]["type"], "website");
    assert_eq!(json["alternates"]["languages"]["en"], "https://devportfolio.com/en");
}

#[test]
fn page_metadata_falls_back_to_default_locale() {
    let tr = bundled_translator().unwrap();
    let meta = PageMetadata::build(&tr, "fr", DEFAULT_BASE_URL);
    assert_eq!(meta.locale, "es");
    assert_eq!(
        meta.description,
        "Senior Software Engineer especialista en arquitecturas escalables, IA y desarrollo Full-Stack"
    );
}

#[test]
fn projects_resolve_in_spanish() {
    let tr = bundled_translator().unwrap();
    let projects = LocalizedProject::resolve_all(&tr.locale("es"));
    assert_eq!(projects.len(), 4);

    let defi = &projects[0];
    assert_eq!(defi.variant, ProjectVariant::Featured);
    assert_eq!(defi.title, "DeFi Protocol Dashboard");
    let alts: Vec<_> = defi.tech_stack.iter().map(|t| t.alt.as_str()).collect();
    assert_eq!(alts, vec!["Logotipo de React", "Logotipo de TypeScript"]);

    let cs = defi.case_study.as_ref().unwrap();
    assert_eq!(cs.problem_section.items.len(), 6);
    assert_eq!(cs.solution_section.items.len(), 4);
    assert_eq!(cs.capabilities.len(), 6);
    assert_eq!(cs.capabilities[1].icon, "security");

    assert_eq!(projects[1].category.as_deref(), Some("Arquitectura Backend"));
    assert_eq!(projects[2].stat.as_deref(), Some("Rendimiento +98%"));
    assert!(projects[3].case_study.is_none());
}

#[test]
fn project_cards_serialize_without_absent_fields() {
    let tr = bundled_translator().unwrap();
    let projects = LocalizedProject::resolve_all(&tr.locale("en"));
    let json = serde_json::to_value(&projects).unwrap();
    assert_eq!(json[2]["stat"], "Performance +98%");
    assert!(json[3].get("caseStudy").is_none());
    assert_eq!(json[0]["caseStudy"]["problemSection"]["title"], "The problem");
}

#[test]
fn language_switcher_labels() {
    let tr = bundled_translator().unwrap();
    let ctx = tr.locale("en");
    let options = language_options(&tr, &ctx);
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].label, "Switch to Español");
    assert!(options[1].active);

    let es = language_options(&tr, &tr.locale("es"));
    assert_eq!(es[1].label, "Cambiar a English");
    assert!(es[0].active);
}

#[test]
fn interpolation_examples() {
    let tr = bundled_translator().unwrap();
    assert_eq!(
        tr.translate("en", &t!("interpolation.projectCount", { count: 1 })),
        "1 project completed"
    );
    assert_eq!(
        tr.translate("es", &t!("interpolation.projectCount", { count: 12 })),
        "12 proyectos completados"
    );
    assert_eq!(
        tr.translate("en", &t!("interpolation.greeting", { name: "Ana", count: 3 })),
        "Hi Ana, you have 3 new messages"
    );
    assert_eq!(
        tr.translate("es", &t!("interpolation.experience", { years: 6, technology: "Rust" })),
        "6 años de experiencia con Rust"
    );
}

#[test]
fn configurable_default_locale() {
    let tr = bundled_translator_with_default("en").unwrap();
    assert_eq!(tr.negotiate("de-DE").code(), "en");
    assert!(bundled_translator_with_default("fr").is_err());
}

#[test]
fn hero_stats_keep_their_numbers_across_locales() {
    let tr = bundled_translator().unwrap();
    let values: Vec<_> = HERO_STATS
        .iter()
        .map(|s| (tr.locale("es").t(&s.value_key()), tr.locale("en").t(&s.value_key())))
        .collect();
    for (es, en) in &values {
        assert_eq!(es, en);
    }
    assert_eq!(values[1].0, "6+");
    assert_eq!(tr.locale("es").t(&HERO_STATS[2].label_key()), "MVPs Lanzados");
}

#[test]
fn services_and_skills_in_english() {
    let tr = bundled_translator().unwrap();
    let en = tr.locale("en");
    assert_eq!(en.t(&SERVICES[0].title_key()), "Custom Software & MVPs");
    assert_eq!(en.t(&SERVICES[0].description_key()), "Production-ready software built to scale");
    let frontend: Vec<_> = skills_in(SkillCategory::Frontend)
        .map(|s| en.t(&s.name_key()))
        .collect();
    assert_eq!(frontend, vec!["React", "TypeScript"]);
}

#[test]
fn social_links_are_absolute() {
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        assert!(link.url.starts_with("https://") || link.url.starts_with("mailto:"));
        assert!(SOCIAL_LINKS[i + 1..].iter().all(|l| l.slug != link.slug));
    }
}
