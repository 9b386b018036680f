use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Locale the source catalog and store description are written in.
pub const SOURCE_LANG: &str = "en";

#[derive(Debug)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub translation: TranslationConfig,
}

#[derive(Debug)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
}

#[derive(Debug)]
pub struct TranslationConfig {
    /// Project root holding the `_locales` and `screenshots` directories.
    pub root: PathBuf,
    /// Maximum number of catalog entries sent in one translation request.
    pub chunk_size: usize,
}

impl AppConfig {
    /// Build the configuration for one run. The API key is the only value
    /// read from the environment; everything else is fixed by the layout.
    pub fn from_env(root: PathBuf) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY is not set; export it before running")?;
        Ok(Self {
            llm: LlmConfig {
                api_key,
                model: DEFAULT_MODEL.to_string(),
                max_tokens: DEFAULT_MAX_TOKENS,
            },
            translation: TranslationConfig {
                root,
                chunk_size: DEFAULT_CHUNK_SIZE,
            },
        })
    }
}

impl TranslationConfig {
    pub fn locale_dir(&self, lang: &str) -> PathBuf {
        self.root.join("_locales").join(lang)
    }

    pub fn messages_path(&self, lang: &str) -> PathBuf {
        self.locale_dir(lang).join("messages.json")
    }

    pub fn description_path(&self, lang: &str) -> PathBuf {
        self.locale_dir(lang).join("store_description.txt")
    }

    pub fn screenshots_dir(&self) -> PathBuf {
        self.root.join("screenshots")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn translation(root: &str) -> TranslationConfig {
        TranslationConfig {
            root: PathBuf::from(root),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    #[test]
    fn messages_path_follows_locales_layout() {
        let cfg = translation("/project");
        assert_eq!(
            cfg.messages_path("en"),
            Path::new("/project/_locales/en/messages.json")
        );
        assert_eq!(
            cfg.messages_path("pt_BR"),
            Path::new("/project/_locales/pt_BR/messages.json")
        );
    }

    #[test]
    fn description_path_follows_locales_layout() {
        let cfg = translation("/project");
        assert_eq!(
            cfg.description_path("fr"),
            Path::new("/project/_locales/fr/store_description.txt")
        );
    }

    #[test]
    fn screenshots_live_under_root() {
        let cfg = translation("/project");
        assert_eq!(cfg.screenshots_dir(), Path::new("/project/screenshots"));
    }

    #[test]
    fn default_chunk_size_is_50() {
        assert_eq!(DEFAULT_CHUNK_SIZE, 50);
    }
}
