// File: src/enrich.rs
use crate::core::engine::PhoneticEngine;
use crate::core::types::{KnownPhoneticsIndex, Transcription};
use crate::corpus::Corpus;
use crate::dictionary::PronouncingDictionary;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Words already handled by an earlier, interrupted run.
///
/// Maps a lowercased word to the transcription found for it. An empty string
/// records that the word was attempted and nothing was found, so a resumed
/// run does not try it again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    processed: BTreeMap<String, String>,
}

impl Checkpoint {
    /// `None` if the word was never processed, `Some(None)` if it was
    /// processed without a result.
    pub fn get(&self, word: &str) -> Option<Option<&str>> {
        self.processed
            .get(word)
            .map(|p| Some(p.as_str()).filter(|p| !p.is_empty()))
    }

    pub fn record(&mut self, word: &str, result: Option<&str>) {
        self.processed
            .insert(word.to_string(), result.unwrap_or_default().to_string());
    }

    pub fn len(&self) -> usize {
        self.processed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Dictionary,
    Derived,
}

#[derive(Debug, Clone, Copy)]
pub struct EnrichOptions {
    /// Rewrite newly found transcriptions to the American convention.
    pub normalize: bool,
    /// Newly resolved words between checkpoint flushes.
    pub checkpoint_interval: usize,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self { normalize: true, checkpoint_interval: 30 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    pub missing: usize,
    pub filled: usize,
    pub from_dictionary: usize,
    pub derived: usize,
    pub reused: usize,
    pub unresolved: usize,
}

/// Fills missing transcriptions in a corpus.
pub struct EnrichmentDriver<'a> {
    engine: &'a PhoneticEngine,
    dictionary: Option<&'a PronouncingDictionary>,
    options: EnrichOptions,
}

impl<'a> EnrichmentDriver<'a> {
    pub fn new(engine: &'a PhoneticEngine, options: EnrichOptions) -> Self {
        Self { engine, dictionary: None, options }
    }

    pub fn with_dictionary(mut self, dictionary: &'a PronouncingDictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Finds a transcription for one word: the pronouncing dictionary first,
    /// then derivation from `known`.
    pub fn resolve(&self, word: &str, known: &KnownPhoneticsIndex) -> Option<(Transcription, Source)> {
        if let Some(phonemes) = self.dictionary.and_then(|d| d.lookup(word)) {
            if let Some(t) = self.engine.transcode(phonemes) {
                return Some((self.finish(t, word), Source::Dictionary));
            }
        }
        self.engine
            .derive(word, known)
            .map(|t| (self.finish(t, word), Source::Derived))
    }

    fn finish(&self, t: Transcription, word: &str) -> Transcription {
        if self.options.normalize {
            self.engine.normalize_transcription(t, word)
        } else {
            t
        }
    }

    /// Runs one pass over `corpus`.
    ///
    /// The snapshot of known transcriptions is taken before any entry is
    /// touched and is not refreshed, so words filled in this pass never serve
    /// as derivation bases until the next pass. Existing transcriptions are
    /// never overwritten. `flush` receives the checkpoint every
    /// `checkpoint_interval` newly resolved words and once at the end.
    pub fn run<F>(&self, corpus: &mut Corpus, checkpoint: &mut Checkpoint, mut flush: F) -> Result<PassReport>
    where
        F: FnMut(&Checkpoint) -> Result<()>,
    {
        let known = KnownPhoneticsIndex::from_pairs(corpus.known_pairs());
        tracing::info!(
            known = known.len(),
            missing = corpus.missing_count(),
            checkpointed = checkpoint.len(),
            "starting enrichment pass"
        );

        let interval = self.options.checkpoint_interval.max(1);
        let mut report = PassReport::default();
        let mut since_flush = 0;

        for subset in corpus.subsets.iter_mut() {
            let mut filled = 0;
            for entry in subset.list.words.iter_mut().filter(|e| !e.has_phonetic()) {
                report.missing += 1;
                let key = entry.word.trim().to_lowercase();

                let result = match checkpoint.get(&key) {
                    Some(previous) => {
                        report.reused += 1;
                        previous.map(str::to_string)
                    }
                    None => {
                        let resolved = self.resolve(&entry.word, &known);
                        match &resolved {
                            Some((_, Source::Dictionary)) => report.from_dictionary += 1,
                            Some((_, Source::Derived)) => report.derived += 1,
                            None => {}
                        }
                        let text = resolved.map(|(t, _)| t.into_string());
                        checkpoint.record(&key, text.as_deref());

                        since_flush += 1;
                        if since_flush >= interval {
                            flush(checkpoint)?;
                            since_flush = 0;
                        }
                        text
                    }
                };

                match result {
                    Some(phonetic) => {
                        if entry.fill_phonetic(&phonetic) {
                            filled += 1;
                            tracing::debug!(word = %entry.word, %phonetic, "filled");
                        }
                    }
                    None => report.unresolved += 1,
                }
            }

            if filled > 0 {
                subset.dirty = true;
                report.filled += filled;
                tracing::info!(subset = %subset.name, filled, "subset enriched");
            }
        }

        flush(checkpoint)?;
        tracing::info!(?report, "enrichment pass finished");
        Ok(report)
    }
}

/// Rewrites every stored transcription to the American convention.
///
/// Unlike an enrichment pass this replaces existing values. Returns how many
/// entries changed.
pub fn convert_dialect(corpus: &mut Corpus, engine: &PhoneticEngine) -> usize {
    let mut total = 0;
    for subset in corpus.subsets.iter_mut() {
        let mut changed = 0;
        for entry in subset.list.words.iter_mut() {
            let normalized = match entry.phonetic() {
                Some(p) => match engine.normalize(p, &entry.word) {
                    Cow::Owned(out) => Some(out),
                    Cow::Borrowed(_) => None,
                },
                None => None,
            };
            if let Some(out) = normalized {
                entry.phonetic = Some(out);
                changed += 1;
            }
        }
        if changed > 0 {
            subset.dirty = true;
            total += changed;
            tracing::info!(subset = %subset.name, changed, "converted transcriptions");
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Subset, WordEntry, WordList};
    use std::path::PathBuf;

    fn entry(word: &str, phonetic: Option<&str>) -> WordEntry {
        let mut e = WordEntry::new(word, word);
        e.phonetic = phonetic.map(str::to_string);
        e
    }

    fn corpus(subsets: Vec<(&str, Vec<WordEntry>)>) -> Corpus {
        Corpus::new(
            subsets
                .into_iter()
                .map(|(name, words)| Subset {
                    name: name.to_string(),
                    path: PathBuf::from(format!("{name}.json")),
                    list: WordList {
                        level: name.to_string(),
                        total_words: words.len(),
                        version: 1,
                        words,
                        extra: Default::default(),
                    },
                    dirty: false,
                })
                .collect(),
        )
    }

    fn phonetic_of<'c>(corpus: &'c Corpus, word: &str) -> Option<&'c str> {
        corpus.entries().find(|e| e.word == word).and_then(|e| e.phonetic())
    }

    #[test]
    fn derived_entries_do_not_chain_within_a_pass() {
        let engine = PhoneticEngine::default();
        let mut c = corpus(vec![(
            "cefr/a1",
            vec![
                entry("care", Some("/keər/")),
                entry("careless", None),
                entry("carelessness", None),
            ],
        )]);
        let mut checkpoint = Checkpoint::default();
        let driver = EnrichmentDriver::new(&engine, EnrichOptions::default());

        let report = driver.run(&mut c, &mut checkpoint, |_| Ok(())).unwrap();
        assert_eq!(phonetic_of(&c, "careless"), Some("/keərləs/"));
        assert_eq!(phonetic_of(&c, "carelessness"), None);
        assert_eq!(report.derived, 1);
        assert_eq!(report.unresolved, 1);

        // the next pass sees "careless" in its snapshot, but the checkpoint
        // already says "carelessness" was tried
        let report = driver.run(&mut c, &mut checkpoint, |_| Ok(())).unwrap();
        assert_eq!(report.reused, 1);
        assert_eq!(phonetic_of(&c, "carelessness"), None);

        let report = driver.run(&mut c, &mut Checkpoint::default(), |_| Ok(())).unwrap();
        assert_eq!(report.derived, 1);
        assert_eq!(phonetic_of(&c, "carelessness"), Some("/keərləsnəs/"));
    }

    #[test]
    fn dictionary_takes_precedence_and_existing_values_stay() {
        let engine = PhoneticEngine::default();
        let dict = PronouncingDictionary::parse("lovely L AH1 V L IY0\nlove L AH1 V\n".as_bytes()).unwrap();
        let mut c = corpus(vec![(
            "china/junior",
            vec![entry("love", Some("/lɒv/")), entry("lovely", None)],
        )]);
        let driver = EnrichmentDriver::new(&engine, EnrichOptions::default()).with_dictionary(&dict);

        let report = driver.run(&mut c, &mut Checkpoint::default(), |_| Ok(())).unwrap();
        assert_eq!(report.from_dictionary, 1);
        assert_eq!(report.derived, 0);
        assert_eq!(phonetic_of(&c, "lovely"), Some("/lʌvliː/"));
        assert_eq!(phonetic_of(&c, "love"), Some("/lɒv/"));
        assert!(c.subsets[0].dirty);
    }

    #[test]
    fn normalization_applies_to_new_values_only_when_enabled() {
        let engine = PhoneticEngine::default();
        let words = || vec![entry("slow", Some("/sləʊ/")), entry("slowly", None)];

        let mut c = corpus(vec![("a", words())]);
        EnrichmentDriver::new(&engine, EnrichOptions::default())
            .run(&mut c, &mut Checkpoint::default(), |_| Ok(()))
            .unwrap();
        assert_eq!(phonetic_of(&c, "slowly"), Some("/sloʊli/"));
        assert_eq!(phonetic_of(&c, "slow"), Some("/sləʊ/"));

        let mut c = corpus(vec![("a", words())]);
        let raw = EnrichOptions { normalize: false, ..EnrichOptions::default() };
        EnrichmentDriver::new(&engine, raw)
            .run(&mut c, &mut Checkpoint::default(), |_| Ok(()))
            .unwrap();
        assert_eq!(phonetic_of(&c, "slowly"), Some("/sləʊli/"));
    }

    #[test]
    fn duplicate_words_across_subsets_resolve_once() {
        let engine = PhoneticEngine::default();
        let mut c = corpus(vec![
            ("cefr/a1", vec![entry("kind", Some("/kaɪnd/")), entry("kindness", None)]),
            ("china/cet4", vec![entry("Kindness", None)]),
        ]);
        let mut checkpoint = Checkpoint::default();
        let report = EnrichmentDriver::new(&engine, EnrichOptions::default())
            .run(&mut c, &mut checkpoint, |_| Ok(()))
            .unwrap();
        assert_eq!(report.derived, 1);
        assert_eq!(report.reused, 1);
        assert_eq!(report.filled, 2);
        assert_eq!(checkpoint.get("kindness"), Some(Some("/kaɪndnəs/")));
        assert!(c.subsets.iter().all(|s| s.dirty));
    }

    #[test]
    fn flushes_on_interval_and_at_end() {
        let engine = PhoneticEngine::default();
        let words = (0..5).map(|i| entry(&format!("zz{i}"), None)).collect();
        let mut c = corpus(vec![("a", words)]);
        let options = EnrichOptions { normalize: true, checkpoint_interval: 2 };

        let mut sizes = Vec::new();
        EnrichmentDriver::new(&engine, options)
            .run(&mut c, &mut Checkpoint::default(), |cp| {
                sizes.push(cp.len());
                Ok(())
            })
            .unwrap();
        assert_eq!(sizes, [2, 4, 5]);
        assert!(!c.subsets[0].dirty);
    }

    #[test]
    fn convert_dialect_rewrites_existing_values() {
        let engine = PhoneticEngine::default();
        let mut c = corpus(vec![(
            "cefr/b1",
            vec![
                entry("bath", Some("[bɑːθ]")),
                entry("father", Some("/fɑːðər/")),
                entry("hot", Some("/hɒt/")),
                entry("blank", None),
            ],
        )]);
        assert_eq!(convert_dialect(&mut c, &engine), 2);
        assert_eq!(phonetic_of(&c, "bath"), Some("/bæθ/"));
        assert_eq!(phonetic_of(&c, "father"), Some("/fɑːðər/"));
        assert_eq!(phonetic_of(&c, "hot"), Some("/hɑt/"));
        assert!(c.subsets[0].dirty);
        assert_eq!(convert_dialect(&mut c, &engine), 0);
    }
}
