// File: src/corpus.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Meaning text in the learner's language (`zh`) and in English (`en`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

/// One vocabulary entry. Fields this crate does not know about are kept in
/// `extra` so rewriting a file never drops data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: String,
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<Meaning>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordEntry {
    pub fn new(id: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            phonetic: None,
            pos: None,
            meaning: None,
            extra: Map::new(),
        }
    }

    /// The stored phonetic, if it has any non-whitespace content.
    pub fn phonetic(&self) -> Option<&str> {
        self.phonetic.as_deref().filter(|p| !p.trim().is_empty())
    }

    pub fn has_phonetic(&self) -> bool {
        self.phonetic().is_some()
    }

    /// Stores `phonetic` only when the entry has none. Returns whether it did.
    pub fn fill_phonetic(&mut self, phonetic: &str) -> bool {
        if self.has_phonetic() || phonetic.trim().is_empty() {
            return false;
        }
        self.phonetic = Some(phonetic.to_string());
        true
    }
}

/// The contents of one word-list file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordList {
    pub level: String,
    pub total_words: usize,
    pub version: u32,
    pub words: Vec<WordEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A word list together with where it came from.
#[derive(Debug, Clone)]
pub struct Subset {
    /// `<subset-dir>/<file stem>`, e.g. `cefr/c2`.
    pub name: String,
    pub path: PathBuf,
    pub list: WordList,
    pub dirty: bool,
}

impl Subset {
    pub fn coverage(&self) -> Coverage {
        Coverage {
            name: self.name.clone(),
            with_phonetic: self.list.words.iter().filter(|w| w.has_phonetic()).count(),
            total: self.list.words.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    pub name: String,
    pub with_phonetic: usize,
    pub total: usize,
}

impl Coverage {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.with_phonetic as f64 * 100.0 / self.total as f64
        }
    }
}

/// Every subset of a vocabulary data set, in load order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub subsets: Vec<Subset>,
}

impl Corpus {
    pub fn new(subsets: Vec<Subset>) -> Self {
        Self { subsets }
    }

    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.subsets.iter().flat_map(|s| s.list.words.iter())
    }

    /// (word, phonetic) for every entry that has a phonetic.
    pub fn known_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries()
            .filter_map(|e| e.phonetic().map(|p| (e.word.as_str(), p)))
    }

    pub fn missing_count(&self) -> usize {
        self.entries().filter(|e| !e.has_phonetic()).count()
    }

    pub fn coverage(&self) -> Vec<Coverage> {
        self.subsets.iter().map(Subset::coverage).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"{
  "level": "c2",
  "totalWords": 2,
  "version": 3,
  "words": [
    { "id": "c2-1", "word": "lovely", "pos": "adj", "meaning": { "zh": "可爱的", "en": "charming" }, "tags": ["x"] },
    { "id": "c2-2", "word": "love", "phonetic": "/lʌv/" }
  ],
  "source": "cefr"
}"#;

    #[test]
    fn word_list_round_trips_unknown_fields() {
        let list: WordList = serde_json::from_str(LIST).unwrap();
        assert_eq!(list.total_words, 2);
        assert_eq!(list.words[0].extra["tags"], serde_json::json!(["x"]));
        assert_eq!(list.words[0].meaning.as_ref().unwrap().zh.as_deref(), Some("可爱的"));

        let back = serde_json::to_value(&list).unwrap();
        assert_eq!(back["source"], "cefr");
        assert_eq!(back["totalWords"], 2);
        assert!(back["words"][0].get("phonetic").is_none());
    }

    #[test]
    fn fill_only_when_missing() {
        let mut entry = WordEntry::new("1", "love");
        assert!(entry.fill_phonetic("/lʌv/"));
        assert!(!entry.fill_phonetic("/lɒv/"));
        assert_eq!(entry.phonetic(), Some("/lʌv/"));

        let mut blank = WordEntry::new("2", "hate");
        blank.phonetic = Some("  ".into());
        assert!(!blank.has_phonetic());
        assert!(blank.fill_phonetic("/heɪt/"));
        assert!(!blank.fill_phonetic(""));
    }

    #[test]
    fn coverage_counts() {
        let list: WordList = serde_json::from_str(LIST).unwrap();
        let corpus = Corpus::new(vec![Subset {
            name: "cefr/c2".into(),
            path: PathBuf::from("c2.json"),
            list,
            dirty: false,
        }]);
        assert_eq!(corpus.missing_count(), 1);
        assert_eq!(corpus.known_pairs().collect::<Vec<_>>(), [("love", "/lʌv/")]);
        let cov = &corpus.coverage()[0];
        assert_eq!((cov.with_phonetic, cov.total), (1, 2));
        assert!((cov.percent() - 50.0).abs() < 1e-9);
    }
}
