// File: src/config.rs
use crate::core::converter::VowelLength;
use crate::enrich::EnrichOptions;
use crate::error::{PhoneticError, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct EnrichConfig {
    pub corpus_root: PathBuf,
    /// Directories under `corpus_root` holding word-list files.
    pub subsets: Vec<String>,
    pub dictionary_path: Option<PathBuf>,
    pub dictionary_cache: Option<PathBuf>,
    pub checkpoint_path: Option<PathBuf>,
    pub checkpoint_interval: usize,
    pub vowel_length: VowelLength,
    pub normalize: bool,
    pub log_level: String,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            corpus_root: PathBuf::from("src/data/words"),
            subsets: vec!["cefr".to_string(), "china".to_string()],
            dictionary_path: None,
            dictionary_cache: None,
            checkpoint_path: None,
            checkpoint_interval: 30,
            vowel_length: VowelLength::Marked,
            normalize: true,
            log_level: "info".to_string(),
        }
    }
}

impl EnrichConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or unparseable values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let subsets = non_empty("PHONETIC_SUBSETS")
            .map(|value| {
                value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.subsets);

        let checkpoint_interval = non_empty("PHONETIC_CHECKPOINT_INTERVAL")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(defaults.checkpoint_interval);

        let vowel_length = non_empty("PHONETIC_VOWEL_LENGTH")
            .and_then(|value| value.parse::<VowelLength>().ok())
            .unwrap_or(defaults.vowel_length);

        Self {
            corpus_root: non_empty("PHONETIC_CORPUS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.corpus_root),
            subsets,
            dictionary_path: non_empty("PHONETIC_DICTIONARY").map(PathBuf::from),
            dictionary_cache: non_empty("PHONETIC_DICTIONARY_CACHE").map(PathBuf::from),
            checkpoint_path: non_empty("PHONETIC_CHECKPOINT").map(PathBuf::from),
            checkpoint_interval,
            vowel_length,
            normalize: defaults.normalize,
            log_level: non_empty("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.subsets.is_empty() {
            return Err(PhoneticError::InvalidConfig("no subset directories configured".into()));
        }
        if self.checkpoint_interval == 0 {
            return Err(PhoneticError::InvalidConfig("checkpoint interval must be at least 1".into()));
        }
        Ok(())
    }

    pub fn enrich_options(&self) -> EnrichOptions {
        EnrichOptions {
            normalize: self.normalize,
            checkpoint_interval: self.checkpoint_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> EnrichConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnrichConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_map(&[]);
        assert_eq!(config.subsets, ["cefr", "china"]);
        assert_eq!(config.checkpoint_interval, 30);
        assert_eq!(config.vowel_length, VowelLength::Marked);
        assert!(config.dictionary_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_overrides() {
        let config = from_map(&[
            ("PHONETIC_CORPUS_DIR", "/data/words"),
            ("PHONETIC_SUBSETS", "cefr, ,extra"),
            ("PHONETIC_CHECKPOINT_INTERVAL", "5"),
            ("PHONETIC_VOWEL_LENGTH", "unmarked"),
            ("PHONETIC_DICTIONARY", "/tmp/cmudict.txt"),
            ("RUST_LOG", "debug"),
        ]);
        assert_eq!(config.corpus_root, PathBuf::from("/data/words"));
        assert_eq!(config.subsets, ["cefr", "extra"]);
        assert_eq!(config.checkpoint_interval, 5);
        assert_eq!(config.vowel_length, VowelLength::Unmarked);
        assert_eq!(config.dictionary_path, Some(PathBuf::from("/tmp/cmudict.txt")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn bad_values_fall_back_and_validate_rejects_zero() {
        let config = from_map(&[
            ("PHONETIC_CHECKPOINT_INTERVAL", "soon"),
            ("PHONETIC_VOWEL_LENGTH", "long"),
        ]);
        assert_eq!(config.checkpoint_interval, 30);
        assert_eq!(config.vowel_length, VowelLength::Marked);

        let zero = from_map(&[("PHONETIC_CHECKPOINT_INTERVAL", "0")]);
        assert!(matches!(zero.validate(), Err(PhoneticError::InvalidConfig(_))));
    }
}
