//! Subcommand implementations. Each writes its result to `out`.

use anyhow::{Context, Result};
use devfolio_content::{catalog_keys, LocalizedProject, PageMetadata};
use devfolio_i18n::{
    base_language, check_completeness, parse_accept_language, ArgValue, LocaleRegistry, Message,
    Translator,
};
use std::io::Write;
use tracing::warn;

use crate::config::DevfolioConfig;

/// Print the locale chosen for `tags`, then the tags of `accept_language`.
pub fn locale(
    registry: &LocaleRegistry,
    tags: &[String],
    accept_language: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let mut prefs = tags.to_vec();
    if let Some(header) = accept_language {
        prefs.extend(parse_accept_language(header));
    }
    writeln!(out, "{}", registry.resolve(&prefs))?;
    Ok(())
}

/// Parse `name=value`. Integer-looking values become numbers.
pub fn parse_arg(raw: &str) -> Result<(String, ArgValue)> {
    let (name, value) = raw
        .split_once('=')
        .with_context(|| format!("Argument {raw:?} is not of the form name=value"))?;
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Argument {raw:?} has an empty name");
    }
    let value = match value.parse::<i64>() {
        Ok(n) => ArgValue::Int(n),
        Err(_) => ArgValue::Str(value.to_string()),
    };
    Ok((name.to_string(), value))
}

/// Map a requested locale onto a supported one, or the default.
fn pick_locale<'t>(translator: &'t Translator, requested: Option<&str>) -> &'t str {
    let registry = translator.registry();
    match requested {
        Some(tag) => {
            let code = registry.resolve([tag]);
            if !registry.is_supported(&base_language(tag)) {
                warn!(requested = %tag, locale = %code, "unsupported locale, falling back");
            }
            code
        }
        None => registry.default_locale(),
    }
}

pub fn translate(
    translator: &Translator,
    key: &str,
    locale: Option<&str>,
    args: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let mut msg = Message::new(key.to_string());
    for raw in args {
        let (name, value) = parse_arg(raw)?;
        msg = msg.arg(name, value);
    }
    let code = pick_locale(translator, locale);
    writeln!(out, "{}", translator.translate(code, &msg))?;
    Ok(())
}

/// Completeness report plus any catalog key that does not resolve.
/// Returns `true` when there is nothing to report.
pub fn check(translator: &Translator, out: &mut impl Write) -> Result<bool> {
    let report = check_completeness(translator);
    writeln!(out, "{}", report.to_string().trim_end())?;

    let keys = catalog_keys();
    let mut unresolved = 0usize;
    for code in translator.registry().codes() {
        if translator.dictionary(code).is_none() {
            continue;
        }
        let ctx = translator.locale(code);
        for key in keys.iter().filter(|k| !ctx.has(k)) {
            writeln!(out, "  [{code}] catalog key `{key}` does not resolve")?;
            unresolved += 1;
        }
    }
    if unresolved > 0 {
        writeln!(out, "{unresolved} unresolved catalog key(s)")?;
    }

    Ok(report.is_complete() && unresolved == 0)
}

pub fn meta(
    translator: &Translator,
    config: &DevfolioConfig,
    locale: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let code = pick_locale(translator, locale);
    let meta = PageMetadata::build(translator, code, &config.site.base_url);
    let json = serde_json::to_string_pretty(&meta).context("Failed to serialize metadata")?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn projects(translator: &Translator, locale: Option<&str>, out: &mut impl Write) -> Result<()> {
    let code = pick_locale(translator, locale);
    let cards = LocalizedProject::resolve_all(&translator.locale(code));
    let json = serde_json::to_string_pretty(&cards).context("Failed to serialize projects")?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn show_config(config: &DevfolioConfig, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfolio_content::bundled_translator;
    use pretty_assertions::assert_eq;

    fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn locale_prefers_tags_then_header() {
        let tr = bundled_translator().unwrap();
        let reg = tr.registry();
        assert_eq!(run(|o| locale(reg, &[], Some("fr, en;q=0.8"), o)), "en\n");
        assert_eq!(run(|o| locale(reg, &["es-MX".to_string()], Some("en"), o)), "es\n");
        assert_eq!(run(|o| locale(reg, &[], None, o)), "es\n");
    }

    #[test]
    fn parses_arguments() {
        assert!(matches!(parse_arg("count=3").unwrap().1, ArgValue::Int(3)));
        assert!(matches!(parse_arg("name=Ana").unwrap().1, ArgValue::Str(s) if s == "Ana"));
        assert!(matches!(parse_arg("note=a=b").unwrap().1, ArgValue::Str(s) if s == "a=b"));
        assert!(parse_arg("novalue").is_err());
        assert!(parse_arg("=3").is_err());
    }

    #[test]
    fn translates_with_arguments() {
        let tr = bundled_translator().unwrap();
        let args = vec!["count=1".to_string()];
        let out = run(|o| translate(&tr, "interpolation.projectCount", Some("en"), &args, o));
        assert_eq!(out, "1 project completed\n");

        let out = run(|o| translate(&tr, "metadata.title", Some("en-GB"), &[], o));
        assert_eq!(out, "Software Developer - Portfolio\n");

        let out = run(|o| translate(&tr, "metadata.nope", None, &[], o));
        assert_eq!(out, "metadata.nope\n");
    }

    #[test]
    fn bundled_dictionaries_pass_check() {
        let tr = bundled_translator().unwrap();
        let mut buf = Vec::new();
        assert!(check(&tr, &mut buf).unwrap());
        assert!(String::from_utf8(buf).unwrap().contains("all locales complete"));
    }

    #[test]
    fn check_flags_gaps() {
        let mut tr = Translator::new(tr_registry());
        tr.load_json_str("es", r#"{"hero":{"badge":"Hola"}}"#).unwrap();
        let mut buf = Vec::new();
        assert!(!check(&tr, &mut buf).unwrap());
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("[en] no dictionary loaded"));
        assert!(text.contains("[es] catalog key `projects.items.defi.title` does not resolve"));
    }

    fn tr_registry() -> LocaleRegistry {
        devfolio_content::registry("es").unwrap()
    }

    #[test]
    fn meta_is_json() {
        let tr = bundled_translator().unwrap();
        let config = DevfolioConfig::default();
        let out = run(|o| meta(&tr, &config, Some("en"), o));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "Software Developer - Portfolio");
        assert_eq!(value["alternates"]["canonical"], "https://devportfolio.com/es");
    }

    #[test]
    fn projects_are_json() {
        let tr = bundled_translator().unwrap();
        let out = run(|o| projects(&tr, Some("es"), o));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(4));
        assert_eq!(value[1]["category"], "Arquitectura Backend");
    }
}
