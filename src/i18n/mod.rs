//! Internationalization (i18n) support
//!
//! Labels shown by the renderer (month names, placeholder text, error
//! messages) are looked up here. French and English tables are built in;
//! files in the configured languages directory extend or override them.

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const FR: &[(&str, &str)] = &[
    ("date.unspecified", "Date non spécifiée"),
    ("date.month.1", "janvier"),
    ("date.month.2", "février"),
    ("date.month.3", "mars"),
    ("date.month.4", "avril"),
    ("date.month.5", "mai"),
    ("date.month.6", "juin"),
    ("date.month.7", "juillet"),
    ("date.month.8", "août"),
    ("date.month.9", "septembre"),
    ("date.month.10", "octobre"),
    ("date.month.11", "novembre"),
    ("date.month.12", "décembre"),
    ("empty.message", "Aucun contenu pour le moment."),
    ("empty.link", "Ajouter du contenu"),
    ("error.load", "Impossible de charger ce contenu pour le moment."),
    ("error.article", "Impossible de charger cet article."),
    ("error.photo", "Impossible de charger cette photo."),
    ("blog.read_more", "Lire plus →"),
];

const EN: &[(&str, &str)] = &[
    ("date.unspecified", "Date unspecified"),
    ("date.month.1", "January"),
    ("date.month.2", "February"),
    ("date.month.3", "March"),
    ("date.month.4", "April"),
    ("date.month.5", "May"),
    ("date.month.6", "June"),
    ("date.month.7", "July"),
    ("date.month.8", "August"),
    ("date.month.9", "September"),
    ("date.month.10", "October"),
    ("date.month.11", "November"),
    ("date.month.12", "December"),
    ("empty.message", "No content yet."),
    ("empty.link", "Add content"),
    ("error.load", "This content could not be loaded right now."),
    ("error.article", "This article could not be loaded."),
    ("error.photo", "This photo could not be loaded."),
    ("blog.read_more", "Read more →"),
];

/// Internationalization handler
#[derive(Debug, Clone)]
pub struct I18n {
    /// Current language
    language: String,
    /// Language data: lang -> dotted key -> translation
    translations: HashMap<String, HashMap<String, String>>,
}

impl I18n {
    /// Create a handler with the built-in tables
    pub fn new(language: &str) -> Self {
        let mut translations = HashMap::new();
        for (lang, table) in [("fr", FR), ("en", EN)] {
            let table = table
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            translations.insert(lang.to_string(), table);
        }

        Self {
            language: language.to_string(),
            translations,
        }
    }

    /// Load language files from a directory, merging over the built-in tables
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("yml") | Some("yaml") | Some("json")) {
                continue;
            }

            let lang = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("en")
                .to_string();
            let content = fs::read_to_string(&path)?;

            // Skip invalid files
            let data: Option<serde_yaml::Value> = if ext == Some("json") {
                match serde_json::from_str::<serde_json::Value>(&content) {
                    Ok(json) => Some(json_value_to_yaml(json)),
                    Err(e) => {
                        tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                        None
                    }
                }
            } else {
                match serde_yaml::from_str(&content) {
                    Ok(data) => Some(data),
                    Err(e) => {
                        tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                        None
                    }
                }
            };

            if let Some(serde_yaml::Value::Mapping(map)) = data {
                let table = self.translations.entry(lang).or_default();
                flatten_translations(&map, "", table);
                tracing::debug!("Loaded language file: {:?}", path);
            }
        }

        Ok(())
    }

    /// Get the current language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get a translation by dotted key
    pub fn get(&self, key: &str) -> String {
        self.get_for_lang(&self.language, key)
    }

    /// Get a translation for a specific language
    pub fn get_for_lang(&self, lang: &str, key: &str) -> String {
        if let Some(value) = self.translations.get(lang).and_then(|t| t.get(key)) {
            return value.clone();
        }

        // Fallback to English
        if lang != "en" {
            if let Some(value) = self.translations.get("en").and_then(|t| t.get(key)) {
                return value.clone();
            }
        }

        key.to_string()
    }

    /// Long-form name of a month (1-based)
    pub fn month_name(&self, month: u32) -> String {
        self.get(&format!("date.month.{}", month))
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("fr")
    }
}

/// Flatten a YAML mapping into dot-notation keys
fn flatten_translations(
    data: &serde_yaml::Mapping,
    prefix: &str,
    result: &mut HashMap<String, String>,
) {
    for (key, value) in data {
        let key = match key {
            serde_yaml::Value::String(s) => s.clone(),
            serde_yaml::Value::Number(n) => n.to_string(),
            _ => continue,
        };
        let full_key = if prefix.is_empty() {
            key
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            serde_yaml::Value::String(s) => {
                result.insert(full_key, s.clone());
            }
            serde_yaml::Value::Number(n) => {
                result.insert(full_key, n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                result.insert(full_key, b.to_string());
            }
            serde_yaml::Value::Mapping(map) => {
                flatten_translations(map, &full_key, result);
            }
            _ => {}
        }
    }
}

fn json_value_to_yaml(json: serde_json::Value) -> serde_yaml::Value {
    match json {
        serde_json::Value::Null => serde_yaml::Value::Null,
        serde_json::Value::Bool(b) => serde_yaml::Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_yaml::Value::Number(i.into())
            } else if let Some(f) = n.as_f64() {
                serde_yaml::Value::Number(serde_yaml::Number::from(f))
            } else {
                serde_yaml::Value::Null
            }
        }
        serde_json::Value::String(s) => serde_yaml::Value::String(s),
        serde_json::Value::Array(arr) => {
            serde_yaml::Value::Sequence(arr.into_iter().map(json_value_to_yaml).collect())
        }
        serde_json::Value::Object(obj) => {
            let mut map = serde_yaml::Mapping::new();
            for (k, v) in obj {
                map.insert(serde_yaml::Value::String(k), json_value_to_yaml(v));
            }
            serde_yaml::Value::Mapping(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables() {
        let fr = I18n::new("fr");
        assert_eq!(fr.month_name(3), "mars");
        assert_eq!(fr.get("blog.read_more"), "Lire plus →");

        let en = I18n::new("en");
        assert_eq!(en.month_name(12), "December");
        assert_eq!(en.get("date.unspecified"), "Date unspecified");
    }

    #[test]
    fn test_fallbacks() {
        let de = I18n::new("de");
        assert_eq!(de.month_name(1), "January");
        assert_eq!(de.get("unknown.key"), "unknown.key");
    }

    #[test]
    fn test_load_languages_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fr.yml"),
            "blog:\n  read_more: Lire la suite\nempty:\n  message: Rien ici\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("es.json"),
            r#"{"date": {"month": {"3": "marzo"}}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("broken.yml"), ": : :\n  - [").unwrap();

        let mut i18n = I18n::new("fr");
        i18n.load_languages(dir.path()).unwrap();

        assert_eq!(i18n.get("blog.read_more"), "Lire la suite");
        assert_eq!(i18n.get("empty.message"), "Rien ici");
        // Untouched built-in keys survive the merge
        assert_eq!(i18n.month_name(8), "août");
        assert_eq!(i18n.get_for_lang("es", "date.month.3"), "marzo");
        assert_eq!(i18n.get_for_lang("es", "date.month.4"), "April");
    }

    #[test]
    fn test_missing_languages_dir_is_ok() {
        let mut i18n = I18n::new("fr");
        assert!(i18n.load_languages("/nonexistent/languages").is_ok());
    }
}
