// src/core/types.rs
use crate::error::{PhoneticError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const DELIMITER: char = '/';

/// A source-notation token such as `AH0` or `TH`. Stress digits carry no
/// information for IPA output and are dropped on parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhonemeSymbol<'a> {
    base: &'a str,
}

impl<'a> PhonemeSymbol<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self { base: raw.trim_end_matches(|c: char| c.is_ascii_digit()) }
    }

    /// The symbol with every trailing stress digit removed.
    pub fn base(&self) -> &'a str {
        self.base
    }
}

/// An IPA transcription in its canonical `/body/` form.
///
/// Built either by the transcoder and derivation engine, or from stored text
/// through [`Transcription::parse`], which accepts the bracket form `[body]`
/// and rewrites it to slashes. The body is never blank and never holds a run
/// of slashes, so every value reads back from its own string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Transcription(String);

impl Transcription {
    /// Strictly parses a stored transcription.
    ///
    /// Fails with [`PhoneticError::MissingDelimiter`] when the text is not
    /// wrapped in `/.../` or `[...]`, and with
    /// [`PhoneticError::EmptyTranscription`] when nothing sits between the
    /// delimiters. Interior slash runs collapse to a single slash, the same
    /// canonical form the dialect normalizer writes.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let inner = if let Some(rest) = trimmed.strip_prefix(DELIMITER) {
            rest.strip_suffix(DELIMITER)
        } else if let Some(rest) = trimmed.strip_prefix('[') {
            rest.strip_suffix(']')
        } else {
            None
        };
        let inner = inner.ok_or_else(|| PhoneticError::MissingDelimiter(raw.to_string()))?;
        Self::from_body(inner).ok_or(PhoneticError::EmptyTranscription)
    }

    /// Wraps an undelimited IPA body. Outer slashes are stripped and interior
    /// slash runs collapse to one. `None` when nothing but whitespace remains.
    pub(crate) fn from_body(body: &str) -> Option<Self> {
        let body = body.trim_matches(DELIMITER);
        if body.trim().is_empty() {
            return None;
        }

        let mut out = String::with_capacity(body.len() + 2);
        out.push(DELIMITER);
        for c in body.chars() {
            if c == DELIMITER && out.ends_with(DELIMITER) {
                continue;
            }
            out.push(c);
        }
        out.push(DELIMITER);
        Some(Self(out))
    }

    /// The IPA symbols between the delimiters.
    pub fn body(&self) -> &str {
        &self.0[1..self.0.len() - 1]
    }

    /// Opens the closing delimiter, appends `fragment` and closes it again.
    pub fn with_suffix(&self, fragment: &str) -> Self {
        let mut out = String::with_capacity(self.0.len() + fragment.len());
        out.push_str(&self.0[..self.0.len() - 1]);
        out.push_str(fragment);
        out.push(DELIMITER);
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Transcription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Transcription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Transcription {
    type Error = PhoneticError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<Transcription> for String {
    fn from(t: Transcription) -> Self {
        t.0
    }
}

/// A suffix paired with the IPA fragment it is pronounced as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub ipa: &'static str,
}

/// Read-only snapshot of every transcription known before a pass starts.
///
/// Keys are lowercased words. The snapshot has no insertion API: results
/// derived during a pass never become derivation bases in the same pass.
#[derive(Debug, Clone, Default)]
pub struct KnownPhoneticsIndex {
    by_word: HashMap<String, Transcription>,
}

impl KnownPhoneticsIndex {
    /// Builds the snapshot, skipping transcriptions that do not parse.
    /// A word seen twice keeps its last transcription.
    pub fn from_pairs<I, W, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, P)>,
        W: AsRef<str>,
        P: AsRef<str>,
    {
        let mut by_word = HashMap::new();
        for (word, phonetic) in pairs {
            let (word, phonetic) = (word.as_ref(), phonetic.as_ref());
            match Transcription::parse(phonetic) {
                Ok(t) => {
                    by_word.insert(word.to_lowercase(), t);
                }
                Err(e) => tracing::trace!(word, phonetic, error = %e, "skipping unusable transcription"),
            }
        }
        Self { by_word }
    }

    pub fn get(&self, word: &str) -> Option<&Transcription> {
        self.by_word.get(word)
    }

    pub fn len(&self) -> usize {
        self.by_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_word.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phoneme_symbol_drops_stress() {
        assert_eq!(PhonemeSymbol::parse("AH0").base(), "AH");
        assert_eq!(PhonemeSymbol::parse("TH").base(), "TH");
        assert_eq!(PhonemeSymbol::parse("1").base(), "");
    }

    #[test]
    fn parse_accepts_both_delimiter_forms() {
        assert_eq!(Transcription::parse("/kæt/").unwrap().as_str(), "/kæt/");
        assert_eq!(Transcription::parse("[kæt]").unwrap().as_str(), "/kæt/");
        assert_eq!(Transcription::parse("  /kæt/ ").unwrap().body(), "kæt");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(
            Transcription::parse("kæt"),
            Err(PhoneticError::MissingDelimiter(_))
        ));
        assert!(matches!(
            Transcription::parse("/kæt"),
            Err(PhoneticError::MissingDelimiter(_))
        ));
        assert!(matches!(
            Transcription::parse("//"),
            Err(PhoneticError::EmptyTranscription)
        ));
        assert!(matches!(
            Transcription::parse("/"),
            Err(PhoneticError::MissingDelimiter(_))
        ));
        assert!(matches!(
            Transcription::parse("/ / /"),
            Err(PhoneticError::EmptyTranscription)
        ));
    }

    #[test]
    fn slash_runs_collapse_to_one() {
        assert_eq!(Transcription::parse("/kæ//t/").unwrap().as_str(), "/kæ/t/");
        assert_eq!(Transcription::parse("//kæt//").unwrap().as_str(), "/kæt/");
        let t = Transcription::parse("[ə///ʊ]").unwrap();
        assert_eq!(Transcription::parse(t.as_str()).unwrap(), t);
    }

    #[test]
    fn blank_bodies_cannot_be_built() {
        for body in ["", "   ", "/", "///", " / "] {
            assert!(Transcription::from_body(body).is_none(), "{body:?}");
        }
    }

    #[test]
    fn with_suffix_recloses() {
        let t = Transcription::parse("/lʌv/").unwrap();
        assert_eq!(t.with_suffix("li").as_str(), "/lʌvli/");
    }

    #[test]
    fn index_lowercases_and_skips_bad_entries() {
        let index = KnownPhoneticsIndex::from_pairs([
            ("Love", "/lʌv/"),
            ("broken", "nope"),
            ("empty", ""),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("love").unwrap().as_str(), "/lʌv/");
        assert!(index.get("broken").is_none());
    }

    #[test]
    fn serde_uses_plain_strings() {
        let t: Transcription = serde_json::from_str("\"[ʃiːp]\"").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"/ʃiːp/\"");
        assert!(serde_json::from_str::<Transcription>("\"ʃiːp\"").is_err());
    }
}
