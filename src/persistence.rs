// File: src/persistence.rs
use crate::corpus::{Corpus, Subset, WordList};
use crate::dictionary::PronouncingDictionary;
use crate::enrich::Checkpoint;
use crate::error::{PhoneticError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `value` as pretty JSON through a temp file in the same directory,
/// so readers never see a half-written file.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp_file.persist(path)?;
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_word_list(path: &Path) -> Result<WordList> {
    load_json(path)
}

pub fn save_word_list(list: &WordList, path: &Path) -> Result<()> {
    save_json(list, path)
}

/// Loads `<root>/<dir>/*.json` for each subset directory, files in name order.
pub fn load_corpus(root: &Path, subset_dirs: &[String]) -> Result<Corpus> {
    let mut subsets = Vec::new();
    for dir in subset_dirs {
        let dir_path = root.join(dir);
        if !dir_path.is_dir() {
            return Err(PhoneticError::UnknownSubset(dir_path.display().to_string()));
        }

        let mut files: Vec<_> = fs::read_dir(&dir_path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().map_or(false, |ext| ext == "json"))
            .collect();
        files.sort();

        for path in files {
            let list = load_word_list(&path)?;
            let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
            tracing::debug!(subset = %dir, file = %stem, words = list.words.len(), "loaded word list");
            subsets.push(Subset {
                name: format!("{dir}/{stem}"),
                path,
                list,
                dirty: false,
            });
        }
    }
    tracing::info!(root = %root.display(), subsets = subsets.len(), "corpus loaded");
    Ok(Corpus::new(subsets))
}

/// Saves every subset modified since loading and clears its dirty flag.
/// Returns how many files were written.
pub fn save_corpus(corpus: &mut Corpus) -> Result<usize> {
    let mut written = 0;
    for subset in corpus.subsets.iter_mut().filter(|s| s.dirty) {
        subset.list.total_words = subset.list.words.len();
        save_word_list(&subset.list, &subset.path)?;
        subset.dirty = false;
        written += 1;
        tracing::info!(subset = %subset.name, "saved word list");
    }
    Ok(written)
}

/// A missing checkpoint file is an empty checkpoint.
pub fn load_checkpoint(path: &Path) -> Result<Checkpoint> {
    if !path.exists() {
        return Ok(Checkpoint::default());
    }
    let checkpoint: Checkpoint = load_json(path)?;
    tracing::info!(processed = checkpoint.len(), "resuming from checkpoint");
    Ok(checkpoint)
}

pub fn save_checkpoint(checkpoint: &Checkpoint, path: &Path) -> Result<()> {
    save_json(checkpoint, path)
}

pub fn save_dictionary_cache(dict: &PronouncingDictionary, path: &Path) -> Result<()> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, dict)?;
        writer.flush()?;
    }
    temp_file.persist(path)?;
    Ok(())
}

pub fn load_dictionary_cache(path: &Path) -> Result<PronouncingDictionary> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}

/// Loads the dictionary from its cache when one exists, otherwise parses the
/// text file and writes the cache for next time.
pub fn load_dictionary(text_path: &Path, cache_path: Option<&Path>) -> Result<PronouncingDictionary> {
    if let Some(cache) = cache_path.filter(|p| p.exists()) {
        match load_dictionary_cache(cache) {
            Ok(dict) => {
                tracing::info!(entries = dict.len(), cache = %cache.display(), "dictionary loaded from cache");
                return Ok(dict);
            }
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable dictionary cache"),
        }
    }

    let dict = PronouncingDictionary::parse(BufReader::new(File::open(text_path)?))?;
    tracing::info!(entries = dict.len(), "dictionary parsed");
    if let Some(cache) = cache_path {
        save_dictionary_cache(&dict, cache)?;
    }
    Ok(dict)
}
