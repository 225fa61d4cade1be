// File: src/core/dialect.rs
use crate::core::symbols::{
    BATH_VOWEL, BATH_VOWEL_AMERICAN, BATH_WORDS, GOAT_DIPHTHONG, GOAT_DIPHTHONG_AMERICAN,
    LOT_VOWEL, LOT_VOWEL_AMERICAN,
};
use crate::core::types::Transcription;
use std::borrow::Cow;

/// A fixed word list gating a dialect rule.
#[derive(Debug, Clone, Copy)]
pub struct LexicalExceptions {
    words: &'static [&'static str],
}

impl LexicalExceptions {
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    /// True when any listed word starts, ends or occurs inside `word`.
    /// `word` is expected lowercased.
    pub fn matches(&self, word: &str) -> bool {
        self.words.iter().any(|listed| {
            word.starts_with(listed) || word.ends_with(listed) || word.contains(listed)
        })
    }
}

/// One substring rewrite, optionally limited to words in an exception list.
#[derive(Debug, Clone, Copy)]
pub struct DialectRule {
    pub source: &'static str,
    pub target: &'static str,
    pub gate: Option<LexicalExceptions>,
}

impl DialectRule {
    fn applies_to(&self, word: &str) -> bool {
        self.gate.map_or(true, |gate| gate.matches(word))
    }
}

pub const BATH_CLASS: LexicalExceptions = LexicalExceptions::new(BATH_WORDS);

/// British to American rewrites, in application order.
pub const BRITISH_TO_AMERICAN: [DialectRule; 3] = [
    DialectRule { source: LOT_VOWEL, target: LOT_VOWEL_AMERICAN, gate: None },
    DialectRule { source: BATH_VOWEL, target: BATH_VOWEL_AMERICAN, gate: Some(BATH_CLASS) },
    DialectRule { source: GOAT_DIPHTHONG, target: GOAT_DIPHTHONG_AMERICAN, gate: None },
];

/// Rewrites IPA transcriptions from one accent convention to another.
#[derive(Debug, Clone)]
pub struct DialectNormalizer {
    rules: Vec<DialectRule>,
}

impl Default for DialectNormalizer {
    fn default() -> Self {
        Self::new(BRITISH_TO_AMERICAN.to_vec())
    }
}

impl DialectNormalizer {
    pub fn new(rules: Vec<DialectRule>) -> Self {
        Self { rules }
    }

    /// Applies every rule once, in order, then canonicalizes the delimiters.
    ///
    /// Returns `Cow::Borrowed(transcription)` when nothing changed. Input with
    /// no body (empty, whitespace, or delimiters only) is returned as is.
    /// Undelimited input is wrapped in slashes rather than rejected.
    pub fn normalize<'a>(&self, transcription: &'a str, word: &str) -> Cow<'a, str> {
        let trimmed = transcription.trim();
        if trimmed.is_empty() {
            return Cow::Borrowed(transcription);
        }

        let word = word.to_lowercase();
        let mut current = trimmed.to_string();
        for rule in &self.rules {
            if rule.applies_to(&word) && current.contains(rule.source) {
                current = current.replace(rule.source, rule.target);
            }
        }

        match canonical_delimiters(&current) {
            Some(out) if out != transcription => Cow::Owned(out),
            _ => Cow::Borrowed(transcription),
        }
    }
}

/// `[x]` becomes `/x/`, missing slashes are added and slash runs collapse,
/// giving the same string [`Transcription`] holds for that body.
/// None when nothing would remain between the delimiters.
fn canonical_delimiters(s: &str) -> Option<String> {
    let inner = match s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        Some(inner) => inner,
        None => s,
    };
    Transcription::from_body(inner).map(Transcription::into_string)
}
