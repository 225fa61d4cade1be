use clap::{Args, Parser, Subcommand};
use crossterm::style::Stylize;
use phonetic_core::config::EnrichConfig;
use phonetic_core::core::converter::VowelLength;
use phonetic_core::corpus::Corpus;
use phonetic_core::enrich::{convert_dialect, Checkpoint, EnrichmentDriver, PassReport};
use phonetic_core::error::Result;
use phonetic_core::{logging, persistence, KnownPhoneticsIndex, PhoneticEngine, PhoneticError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "phonetic_enrich", version, about = "Fill and normalize IPA transcriptions in vocabulary word lists")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transcode ARPABET symbols, e.g. `L AH1 V`, to IPA
    Transcode {
        #[arg(required = true)]
        phonemes: Vec<String>,
        #[arg(long)]
        vowel_length: Option<VowelLength>,
    },
    /// Rewrite one transcription to the American convention
    Normalize {
        transcription: String,
        #[arg(long)]
        word: String,
    },
    /// Derive a word's transcription from the corpus' known words
    Derive {
        word: String,
        #[command(flatten)]
        corpus: CorpusArgs,
    },
    /// Fill missing transcriptions from the dictionary and by derivation
    Enrich {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// cmudict-format pronouncing dictionary
        #[arg(long)]
        dictionary: Option<PathBuf>,
        /// bincode cache of the parsed dictionary
        #[arg(long)]
        dictionary_cache: Option<PathBuf>,
        /// progress file for resuming an interrupted run
        #[arg(long)]
        checkpoint: Option<PathBuf>,
        #[arg(long)]
        checkpoint_interval: Option<usize>,
        #[arg(long)]
        vowel_length: Option<VowelLength>,
        /// keep new transcriptions in their source convention
        #[arg(long)]
        no_normalize: bool,
        /// report without writing any word-list file
        #[arg(long)]
        dry_run: bool,
    },
    /// Rewrite every stored transcription to the American convention
    Convert {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Args, Debug)]
struct CorpusArgs {
    /// directory holding the subset directories
    #[arg(long)]
    corpus: Option<PathBuf>,
    /// comma separated subset directories
    #[arg(long, value_delimiter = ',')]
    subsets: Option<Vec<String>>,
}

impl CorpusArgs {
    fn apply(&self, config: &mut EnrichConfig) {
        if let Some(root) = &self.corpus {
            config.corpus_root = root.clone();
        }
        if let Some(subsets) = &self.subsets {
            config.subsets = subsets.clone();
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut config = EnrichConfig::from_env();
    logging::init_tracing(&config.log_level);

    match run(cli.command, &mut config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &mut EnrichConfig) -> Result<()> {
    match command {
        Command::Transcode { phonemes, vowel_length } => {
            let engine = PhoneticEngine::new(vowel_length.unwrap_or(config.vowel_length));
            let t = engine
                .transcode(phonemes.as_slice())
                .ok_or(PhoneticError::EmptyTranscription)?;
            println!("{t}");
        }
        Command::Normalize { transcription, word } => {
            let engine = PhoneticEngine::new(config.vowel_length);
            println!("{}", engine.normalize(&transcription, &word));
        }
        Command::Derive { word, corpus } => {
            corpus.apply(config);
            config.validate()?;
            let loaded = persistence::load_corpus(&config.corpus_root, &config.subsets)?;
            let known = KnownPhoneticsIndex::from_pairs(loaded.known_pairs());
            let engine = PhoneticEngine::new(config.vowel_length);
            match engine.derive(&word, &known) {
                Some(t) => println!("{t}"),
                None => println!("{}", "no derivation found".yellow()),
            }
        }
        Command::Enrich {
            corpus,
            dictionary,
            dictionary_cache,
            checkpoint,
            checkpoint_interval,
            vowel_length,
            no_normalize,
            dry_run,
        } => {
            corpus.apply(config);
            config.dictionary_path = dictionary.or(config.dictionary_path.take());
            config.dictionary_cache = dictionary_cache.or(config.dictionary_cache.take());
            config.checkpoint_path = checkpoint.or(config.checkpoint_path.take());
            if let Some(interval) = checkpoint_interval {
                config.checkpoint_interval = interval;
            }
            if let Some(vowels) = vowel_length {
                config.vowel_length = vowels;
            }
            config.normalize = !no_normalize;
            config.validate()?;
            enrich(config, dry_run)?;
        }
        Command::Convert { corpus, dry_run } => {
            corpus.apply(config);
            config.validate()?;
            let mut loaded = persistence::load_corpus(&config.corpus_root, &config.subsets)?;
            let engine = PhoneticEngine::new(config.vowel_length);
            let changed = convert_dialect(&mut loaded, &engine);
            let written = if dry_run { 0 } else { persistence::save_corpus(&mut loaded)? };
            println!(
                "{} {} transcriptions converted, {} files written",
                "done:".green().bold(),
                changed,
                written
            );
        }
    }
    Ok(())
}

fn enrich(config: &EnrichConfig, dry_run: bool) -> Result<()> {
    let mut corpus = persistence::load_corpus(&config.corpus_root, &config.subsets)?;
    let dictionary = match &config.dictionary_path {
        Some(path) => Some(persistence::load_dictionary(path, config.dictionary_cache.as_deref())?),
        None => None,
    };
    let mut checkpoint = match &config.checkpoint_path {
        Some(path) => persistence::load_checkpoint(path)?,
        None => Checkpoint::default(),
    };

    let engine = PhoneticEngine::new(config.vowel_length);
    let mut driver = EnrichmentDriver::new(&engine, config.enrich_options());
    if let Some(dict) = &dictionary {
        driver = driver.with_dictionary(dict);
    }

    let checkpoint_path = config.checkpoint_path.clone();
    let report = driver.run(&mut corpus, &mut checkpoint, |cp| match &checkpoint_path {
        Some(path) if !dry_run => persistence::save_checkpoint(cp, path),
        _ => Ok(()),
    })?;

    let written = if dry_run { 0 } else { persistence::save_corpus(&mut corpus)? };
    print_report(&report, &corpus, written);
    Ok(())
}

fn print_report(report: &PassReport, corpus: &Corpus, written: usize) {
    println!("{}", "Enrichment pass".bold());
    println!("  missing before pass: {}", report.missing);
    println!("  from dictionary:     {}", report.from_dictionary.to_string().green());
    println!("  derived:             {}", report.derived.to_string().green());
    println!("  reused checkpoint:   {}", report.reused);
    println!("  unresolved:          {}", report.unresolved.to_string().yellow());
    println!("  filled:              {} ({} files written)", report.filled, written);

    println!("\n{}", "Coverage".bold());
    for cov in corpus.coverage() {
        let line = format!(
            "  {}: {}/{} ({:.1}%)",
            cov.name,
            cov.with_phonetic,
            cov.total,
            cov.percent()
        );
        if cov.with_phonetic == cov.total {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}
