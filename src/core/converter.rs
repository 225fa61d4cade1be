// src/core/converter.rs
use crate::core::symbols::{ARPABET_MARKED, ARPABET_UNMARKED};
use crate::core::types::{PhonemeSymbol, Transcription};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Whether long vowels carry the `ː` length mark in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelLength {
    #[default]
    Marked,
    Unmarked,
}

impl FromStr for VowelLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "marked" => Ok(Self::Marked),
            "unmarked" => Ok(Self::Unmarked),
            other => Err(format!("unknown vowel length {other:?}, expected marked or unmarked")),
        }
    }
}

impl fmt::Display for VowelLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Marked => "marked",
            Self::Unmarked => "unmarked",
        })
    }
}

/// A stateless ARPABET to IPA transcoder.
#[derive(Debug, Clone)]
pub struct ArpabetTranscoder {
    table: HashMap<&'static str, &'static str>,
}

impl Default for ArpabetTranscoder {
    fn default() -> Self {
        Self::new(VowelLength::default())
    }
}

impl ArpabetTranscoder {
    pub fn new(vowels: VowelLength) -> Self {
        let entries = match vowels {
            VowelLength::Marked => &ARPABET_MARKED,
            VowelLength::Unmarked => &ARPABET_UNMARKED,
        };
        Self { table: entries.iter().copied().collect() }
    }

    /// Transcodes a pronunciation such as `["L", "AH1", "V"]` into `/lʌv/`.
    ///
    /// Stress digits are dropped. A symbol missing from the table is kept as
    /// its lowercased base, so an unknown symbol degrades one segment instead
    /// of failing the whole word. Lookup is case-sensitive: `ah0` is unknown.
    ///
    /// Returns `None` when the symbols leave nothing between the delimiters,
    /// as for an empty sequence or bare stress digits.
    pub fn transcode<S: AsRef<str>>(&self, phonemes: &[S]) -> Option<Transcription> {
        let mut body = String::new();
        for raw in phonemes {
            let symbol = PhonemeSymbol::parse(raw.as_ref().trim());
            match self.table.get(symbol.base()) {
                Some(ipa) => body.push_str(ipa),
                None => {
                    tracing::trace!(symbol = symbol.base(), "unmapped phoneme, keeping it lowercased");
                    body.push_str(&symbol.base().to_lowercase());
                }
            }
        }
        Transcription::from_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipa(t: &ArpabetTranscoder, phonemes: &[&str]) -> String {
        t.transcode(phonemes).unwrap().into_string()
    }

    #[test]
    fn transcodes_with_stress_removed() {
        let t = ArpabetTranscoder::default();
        assert_eq!(ipa(&t, &["L", "AH1", "V"]), "/lʌv/");
        assert_eq!(
            t.transcode(&["AH0", "B", "T1"]),
            t.transcode(&["AH", "B", "T"])
        );
    }

    #[test]
    fn keeps_digraphs_and_order() {
        let t = ArpabetTranscoder::default();
        // "church"
        assert_eq!(ipa(&t, &["CH", "ER1", "CH"]), "/tʃɜːrtʃ/");
        // "thing"
        assert_eq!(ipa(&t, &["TH", "IH1", "NG"]), "/θɪŋ/");
    }

    #[test]
    fn vowel_length_flavours() {
        let marked = ArpabetTranscoder::new(VowelLength::Marked);
        let unmarked = ArpabetTranscoder::new(VowelLength::Unmarked);
        let father = ["F", "AA1", "DH", "ER0"];
        assert_eq!(ipa(&marked, &father), "/fɑːðɜːr/");
        assert_eq!(ipa(&unmarked, &father), "/fɑðɜr/");
    }

    #[test]
    fn unknown_symbols_fall_back_to_lowercase() {
        let t = ArpabetTranscoder::default();
        assert_eq!(ipa(&t, &["K", "XQ2", "T"]), "/kxqt/");
        assert_eq!(ipa(&t, &["ah0"]), "/ah/");
        assert_eq!(ipa(&t, &["Th"]), "/th/");
    }

    #[test]
    fn nothing_to_transcribe_gives_none() {
        let t = ArpabetTranscoder::default();
        let empty: [&str; 0] = [];
        assert!(t.transcode(&empty).is_none());
        assert!(t.transcode(&["0"]).is_none());
        assert!(t.transcode(&["/"]).is_none());
        assert!(t.transcode(&["", "  "]).is_none());
    }

    #[test]
    fn output_reads_back_through_serde() {
        let t = ArpabetTranscoder::default();
        for phonemes in [&["L", "AH1", "V"][..], &["K", "/", "/", "T"][..], &["XQ", "1"][..]] {
            let out = t.transcode(phonemes).unwrap();
            let json = serde_json::to_string(&out).unwrap();
            assert_eq!(serde_json::from_str::<Transcription>(&json).unwrap(), out);
        }
    }

    #[test]
    fn vowel_length_parses_from_text() {
        assert_eq!("Unmarked".parse::<VowelLength>(), Ok(VowelLength::Unmarked));
        assert!("long".parse::<VowelLength>().is_err());
    }
}
