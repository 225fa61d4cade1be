use crate::core::converter::{ArpabetTranscoder, VowelLength};
use crate::core::derive::DerivationEngine;
use crate::core::dialect::DialectNormalizer;
use crate::core::types::{KnownPhoneticsIndex, Transcription};
use std::borrow::Cow;

// The engine composes the three stateless components. It holds no per-call
// state, so one instance can serve any number of passes and threads.
#[derive(Clone)]
pub struct PhoneticEngine {
    pub transcoder: ArpabetTranscoder,
    pub normalizer: DialectNormalizer,
    pub deriver: DerivationEngine,
}

impl Default for PhoneticEngine {
    fn default() -> Self {
        Self::new(VowelLength::default())
    }
}

impl PhoneticEngine {
    pub fn new(vowels: VowelLength) -> Self {
        Self {
            transcoder: ArpabetTranscoder::new(vowels),
            normalizer: DialectNormalizer::default(),
            deriver: DerivationEngine::default(),
        }
    }

    pub fn transcode<S: AsRef<str>>(&self, phonemes: &[S]) -> Option<Transcription> {
        self.transcoder.transcode(phonemes)
    }

    pub fn normalize<'a>(&self, transcription: &'a str, word: &str) -> Cow<'a, str> {
        self.normalizer.normalize(transcription, word)
    }

    pub fn derive(&self, word: &str, known: &KnownPhoneticsIndex) -> Option<Transcription> {
        self.deriver.derive(word, known)
    }

    /// Runs a finished transcription through the normalizer.
    pub fn normalize_transcription(&self, transcription: Transcription, word: &str) -> Transcription {
        match self.normalizer.normalize(transcription.as_str(), word) {
            Cow::Borrowed(_) => transcription,
            // normalizer output is already in the canonical form parse produces
            Cow::Owned(out) => Transcription::parse(&out).unwrap_or(transcription),
        }
    }
}
