// src/core/symbols.rs
//! Fixed symbol tables shared by the transcoder, the normalizer and the
//! derivation engine.

use crate::core::types::SuffixRule;

/// ARPABET → IPA with length marks on the long vowels.
pub const ARPABET_MARKED: [(&str, &str); 39] = [
    ("AA", "ɑː"), ("AE", "æ"), ("AH", "ʌ"), ("AO", "ɔː"), ("AW", "aʊ"),
    ("AY", "aɪ"), ("B", "b"), ("CH", "tʃ"), ("D", "d"), ("DH", "ð"),
    ("EH", "ɛ"), ("ER", "ɜːr"), ("EY", "eɪ"), ("F", "f"), ("G", "ɡ"),
    ("HH", "h"), ("IH", "ɪ"), ("IY", "iː"), ("JH", "dʒ"), ("K", "k"),
    ("L", "l"), ("M", "m"), ("N", "n"), ("NG", "ŋ"), ("OW", "oʊ"),
    ("OY", "ɔɪ"), ("P", "p"), ("R", "r"), ("S", "s"), ("SH", "ʃ"),
    ("T", "t"), ("TH", "θ"), ("UH", "ʊ"), ("UW", "uː"), ("V", "v"),
    ("W", "w"), ("Y", "j"), ("Z", "z"), ("ZH", "ʒ"),
];

/// ARPABET → IPA without length marks.
pub const ARPABET_UNMARKED: [(&str, &str); 39] = [
    ("AA", "ɑ"), ("AE", "æ"), ("AH", "ʌ"), ("AO", "ɔ"), ("AW", "aʊ"),
    ("AY", "aɪ"), ("B", "b"), ("CH", "tʃ"), ("D", "d"), ("DH", "ð"),
    ("EH", "ɛ"), ("ER", "ɜr"), ("EY", "eɪ"), ("F", "f"), ("G", "ɡ"),
    ("HH", "h"), ("IH", "ɪ"), ("IY", "i"), ("JH", "dʒ"), ("K", "k"),
    ("L", "l"), ("M", "m"), ("N", "n"), ("NG", "ŋ"), ("OW", "oʊ"),
    ("OY", "ɔɪ"), ("P", "p"), ("R", "r"), ("S", "s"), ("SH", "ʃ"),
    ("T", "t"), ("TH", "θ"), ("UH", "ʊ"), ("UW", "u"), ("V", "v"),
    ("W", "w"), ("Y", "j"), ("Z", "z"), ("ZH", "ʒ"),
];

pub const SUFFIX_RULES: [SuffixRule; 23] = [
    SuffixRule { suffix: "ly", ipa: "li" },
    SuffixRule { suffix: "ness", ipa: "nəs" },
    SuffixRule { suffix: "ish", ipa: "ɪʃ" },
    SuffixRule { suffix: "ment", ipa: "mənt" },
    SuffixRule { suffix: "tion", ipa: "ʃən" },
    SuffixRule { suffix: "sion", ipa: "ʒən" },
    SuffixRule { suffix: "able", ipa: "əbl" },
    SuffixRule { suffix: "ible", ipa: "əbl" },
    SuffixRule { suffix: "ful", ipa: "fəl" },
    SuffixRule { suffix: "less", ipa: "ləs" },
    SuffixRule { suffix: "ity", ipa: "ɪti" },
    SuffixRule { suffix: "ive", ipa: "ɪv" },
    SuffixRule { suffix: "ous", ipa: "əs" },
    SuffixRule { suffix: "al", ipa: "əl" },
    SuffixRule { suffix: "er", ipa: "ər" },
    SuffixRule { suffix: "or", ipa: "ər" },
    SuffixRule { suffix: "ist", ipa: "ɪst" },
    SuffixRule { suffix: "ism", ipa: "ɪzəm" },
    SuffixRule { suffix: "ary", ipa: "əri" },
    SuffixRule { suffix: "ery", ipa: "əri" },
    SuffixRule { suffix: "ory", ipa: "əri" },
    SuffixRule { suffix: "ic", ipa: "ɪk" },
    SuffixRule { suffix: "ical", ipa: "ɪkəl" },
];

/// Words whose British `ɑː` is `æ` in American speech (the bath class).
/// Matched against a word by prefix, suffix or substring.
pub const BATH_WORDS: &[&str] = &[
    "bath", "path", "class", "glass", "grass", "pass", "past", "last", "fast",
    "cast", "vast", "mast", "blast", "mask", "task", "ask", "basket", "master",
    "disaster", "plaster", "pastor", "pasture", "dance", "chance", "glance",
    "france", "lance", "advance", "answer", "can't", "shan't", "aunt",
    "laugh", "half", "calf", "staff", "graph", "photograph", "telegraph",
    "after", "craft", "draft", "shaft", "daft", "raft", "branch",
    "ranch", "demand", "command", "sample", "example", "plant", "grant",
    "slant", "chant", "advantage", "banana", "pyjamas", "tomato",
    "rather", "lather", "gather", "castle", "fasten", "nasty", "rascal",
    "clasp", "grasp", "gasp", "rasp", "raspberry",
];

/// Rounded back vowel merged into its unrounded counterpart.
pub const LOT_VOWEL: &str = "ɒ";
pub const LOT_VOWEL_AMERICAN: &str = "ɑ";
/// Long low back vowel rewritten for bath-class words.
pub const BATH_VOWEL: &str = "ɑː";
pub const BATH_VOWEL_AMERICAN: &str = "æ";
/// Closing diphthong of the goat class.
pub const GOAT_DIPHTHONG: &str = "əʊ";
pub const GOAT_DIPHTHONG_AMERICAN: &str = "oʊ";
