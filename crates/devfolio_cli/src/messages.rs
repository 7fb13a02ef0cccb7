//! Loading dictionaries from a directory instead of the bundled ones.

use anyhow::{Context, Result};
use devfolio_i18n::Translator;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Build a translator from `<code>.json` (or `<code>.yaml`) files in `dir`.
///
/// Locales without a file are left unloaded; `check` reports them.
pub fn load_dir(dir: &Path, default_locale: &str) -> Result<Translator> {
    if !dir.is_dir() {
        anyhow::bail!("Messages directory {} does not exist", dir.display());
    }

    let registry = devfolio_content::registry(default_locale)
        .with_context(|| format!("Invalid default locale {default_locale:?}"))?;
    let codes: Vec<String> = registry.codes().map(str::to_string).collect();
    let mut translator = Translator::new(registry);

    for code in &codes {
        let json = dir.join(format!("{code}.json"));
        let yaml = dir.join(format!("{code}.yaml"));
        if json.is_file() {
            let src = fs::read_to_string(&json)
                .with_context(|| format!("Failed to read {}", json.display()))?;
            translator
                .load_json_str(code, &src)
                .with_context(|| format!("Failed to load {}", json.display()))?;
            info!(locale = %code, path = %json.display(), "loaded dictionary");
        } else if yaml.is_file() {
            let src = fs::read_to_string(&yaml)
                .with_context(|| format!("Failed to read {}", yaml.display()))?;
            translator
                .load_yaml_str(code, &src)
                .with_context(|| format!("Failed to load {}", yaml.display()))?;
            info!(locale = %code, path = %yaml.display(), "loaded dictionary");
        } else {
            warn!(locale = %code, dir = %dir.display(), "no dictionary file for locale");
        }
    }

    Ok(translator)
}
