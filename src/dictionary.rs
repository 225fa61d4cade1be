// File: src/dictionary.rs
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::BufRead;

/// An in-memory pronouncing dictionary in the cmudict layout: one word per
/// line followed by its ARPABET symbols.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PronouncingDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl PronouncingDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses dictionary text.
    ///
    /// `;;;` lines are comments and anything after `#` is dropped. Alternate
    /// pronunciations such as `read(2)` fold into `read`, keeping only the
    /// first one seen. Lines are decoded lossily since the upstream file is
    /// not guaranteed to be UTF-8.
    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut dict = Self::new();
        let mut buf = Vec::new();
        let mut skipped = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut parts = line.split_whitespace();
            let (Some(head), Some(first)) = (parts.next(), parts.next()) else {
                skipped += 1;
                continue;
            };
            let word = head.split('(').next().unwrap_or(head).to_lowercase();
            let mut phonemes = vec![first.to_string()];
            phonemes.extend(parts.map(str::to_string));
            dict.insert(word, phonemes);
        }
        tracing::debug!(entries = dict.len(), skipped, "parsed pronouncing dictionary");
        Ok(dict)
    }

    /// Adds a pronunciation unless the word already has one.
    pub fn insert(&mut self, word: String, phonemes: Vec<String>) {
        self.entries.entry(word).or_insert(phonemes);
    }

    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Looks a corpus word up, trying the spellings from [`lookup_variants`]
    /// in order.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        lookup_variants(word)
            .iter()
            .find_map(|variant| self.get(variant))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Spellings under which a multi-token entry may be listed: as written,
/// without spaces, without hyphens, with spaces as hyphens, without
/// apostrophes, then its first space- or hyphen-separated token.
pub fn lookup_variants(word: &str) -> Vec<String> {
    let word = word.trim().to_lowercase();
    let mut variants: Vec<String> = Vec::with_capacity(7);
    let candidates = [
        Some(word.clone()),
        Some(word.replace(' ', "")),
        Some(word.replace('-', "")),
        Some(word.replace(' ', "-")),
        Some(word.replace('\'', "")),
        word.contains(' ').then(|| word.split(' ').next().unwrap_or("").to_string()),
        word.contains('-').then(|| word.split('-').next().unwrap_or("").to_string()),
    ];
    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}
