// File: src/core/derive.rs
use crate::core::symbols::SUFFIX_RULES;
use crate::core::trie::SuffixTrie;
use crate::core::types::{KnownPhoneticsIndex, SuffixRule, Transcription};

/// A derived word must be longer than its suffix by more than this many characters.
const MIN_STEM_MARGIN: usize = 2;

/// Infers a word's transcription from a known base word plus one suffix.
#[derive(Clone)]
pub struct DerivationEngine {
    suffixes: SuffixTrie,
}

impl Default for DerivationEngine {
    fn default() -> Self {
        Self::new(&SUFFIX_RULES)
    }
}

impl DerivationEngine {
    pub fn new(rules: &[SuffixRule]) -> Self {
        Self { suffixes: SuffixTrie::new(rules) }
    }

    /// Derives `word` from the single longest suffix it ends with.
    ///
    /// Stem variants are probed in a fixed order and the first one present in
    /// `known` wins. Returns `None` when the word is too short for its suffix
    /// or no variant is known. Only one suffix layer is ever stripped.
    pub fn derive(&self, word: &str, known: &KnownPhoneticsIndex) -> Option<Transcription> {
        let word = word.trim().to_lowercase();
        let rule = self.suffixes.longest_match(&word)?;
        if word.chars().count() <= rule.suffix.chars().count() + MIN_STEM_MARGIN {
            return None;
        }

        let stem = &word[..word.len() - rule.suffix.len()];
        let (variant, base) = stem_variants(stem)
            .into_iter()
            .find_map(|variant| known.get(&variant).map(|base| (variant, base)))?;

        tracing::trace!(word = %word, base = %variant, suffix = rule.suffix, "derived");
        Some(base.with_suffix(rule.ipa))
    }
}

/// Candidate base words for `stem`, in precedence order: the bare stem, the
/// stem with a silent `e` restored, the stem with its last letter doubled,
/// and for stems ending in `i` the `y` spelling followed by the stem without
/// the `i`.
pub fn stem_variants(stem: &str) -> Vec<String> {
    let mut variants = Vec::with_capacity(5);
    let mut push = |candidate: String| {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    };

    push(stem.to_string());
    push(format!("{stem}e"));
    if let Some(last) = stem.chars().last() {
        push(format!("{stem}{last}"));
    }
    if let Some(without_i) = stem.strip_suffix('i') {
        push(format!("{without_i}y"));
        push(without_i.to_string());
    }
    variants
}
