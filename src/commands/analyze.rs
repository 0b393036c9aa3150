use crate::cli::LEXICON_ENV_VAR;
use crate::config::{self, AnewConfig, ScoringConfig};
use crate::core::AggregationMode;
use crate::document::{DocumentAnalyzer, DocumentOutcome};
use crate::io::{self, create_writer, ColorMode, OutputFormat};
use crate::lexicon::Lexicon;
use crate::nlp::{RuleLemmatizer, RuleSentenceSplitter, RuleTagger, StopwordSet};
use crate::progress::{ProgressConfig, ProgressManager, TEMPLATE_DOCUMENTS};
use crate::scoring::SentenceScorer;
use anyhow::{bail, Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Dir(PathBuf),
}

pub struct AnalyzeConfig {
    pub input: InputSource,
    pub out: PathBuf,
    pub mode: Option<AggregationMode>,
    pub format: Option<OutputFormat>,
    pub lexicon: Option<PathBuf>,
    pub stopwords: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub parallel: bool,
    pub color: ColorMode,
    pub quiet: bool,
}

/// What one `analyze` run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzeSummary {
    /// Format after CLI, config file and default were resolved
    pub format: OutputFormat,
    pub documents: usize,
    pub skipped_empty: usize,
    pub sentences: usize,
    pub outputs: Vec<PathBuf>,
}

impl AnalyzeSummary {
    /// Terminal output already went to stdout, so only file formats get a summary.
    pub fn wants_summary(&self) -> bool {
        self.format != OutputFormat::Terminal
    }
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<AnalyzeSummary> {
    let settings = load_settings(config.config.as_deref())?;
    let progress = ProgressManager::new(ProgressConfig::from_env(config.quiet));

    let lexicon_path = resolve_lexicon_path(
        config.lexicon.as_deref(),
        &settings,
        std::env::var_os(LEXICON_ENV_VAR).map(PathBuf::from),
    )?;
    let spinner = progress.create_spinner("Loading lexicon");
    let lexicon = Lexicon::load(&lexicon_path)
        .with_context(|| format!("Failed to load lexicon {}", lexicon_path.display()))?;
    spinner.finish_and_clear();
    info!(
        "Loaded {} lexicon entries from {}",
        lexicon.len(),
        lexicon_path.display()
    );

    let stopwords = load_stopwords(config.stopwords.as_deref(), &settings)?;
    let scoring = scoring_config(&settings, config.mode);
    let format = config
        .format
        .or_else(|| settings.output_format())
        .unwrap_or_default();

    if !io::dir_exists(&config.out) {
        bail!(
            "Output directory {} does not exist",
            config.out.display()
        );
    }
    let documents = collect_documents(&config.input)?;
    debug!("Found {} documents to analyze", documents.len());

    let splitter = RuleSentenceSplitter::new();
    let tagger = RuleTagger::new();
    let lemmatizer = RuleLemmatizer::with_vocabulary(lexicon.words());
    let scorer =
        SentenceScorer::new(&lexicon, &stopwords, &tagger, &lemmatizer).with_config(scoring);
    let analyzer = DocumentAnalyzer::new(&splitter, scorer).with_parallel(config.parallel);

    let bar = progress.create_bar(documents.len() as u64, TEMPLATE_DOCUMENTS);
    bar.set_message("Scoring documents");

    let mut summary = AnalyzeSummary {
        format,
        ..AnalyzeSummary::default()
    };
    for path in &documents {
        let started = Instant::now();
        let name = display_name(path);
        bar.set_message(name.clone());

        let text = io::read_document(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let outcome = analyzer
            .analyze(&text)
            .with_context(|| format!("Failed to analyze {}", path.display()))?;

        match outcome {
            DocumentOutcome::Empty => {
                info!("{} is empty, no output written", name);
                summary.skipped_empty += 1;
            }
            DocumentOutcome::Scored(results) => {
                if format == OutputFormat::Terminal {
                    bar.suspend(|| println!("{}", name.bold()));
                }
                let mut writer = create_writer(format, &config.out, path, config.color)?;
                bar.suspend(|| writer.write_results(&results))
                    .with_context(|| format!("Failed to write results for {}", path.display()))?;

                if let Some(output) = io::output::output_path(&config.out, path, format) {
                    summary.outputs.push(output);
                }
                summary.sentences += results.len();
            }
        }

        summary.documents += 1;
        info!(
            "Finished analyzing {} in {:.2}s",
            name,
            started.elapsed().as_secs_f64()
        );
        bar.inc(1);
    }

    bar.finish_with_message("Scoring complete");
    Ok(summary)
}

fn load_settings(explicit: Option<&Path>) -> Result<AnewConfig> {
    match explicit {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}

/// `--lexicon` wins over the config file, which wins over the environment.
pub fn resolve_lexicon_path(
    cli: Option<&Path>,
    settings: &AnewConfig,
    env: Option<PathBuf>,
) -> Result<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| settings.lexicon_path().cloned())
        .or(env)
        .with_context(|| {
            format!(
                "No lexicon configured: pass --lexicon, set [lexicon] path in {} or export {}",
                config::CONFIG_FILE_NAME,
                LEXICON_ENV_VAR
            )
        })
}

fn load_stopwords(cli: Option<&Path>, settings: &AnewConfig) -> Result<StopwordSet> {
    match cli.or_else(|| settings.stopwords_path().map(PathBuf::as_path)) {
        Some(path) => {
            let stopwords = StopwordSet::from_file(path)?;
            debug!("Loaded {} stopwords from {}", stopwords.len(), path.display());
            Ok(stopwords)
        }
        None => Ok(StopwordSet::english()),
    }
}

fn scoring_config(settings: &AnewConfig, mode: Option<AggregationMode>) -> ScoringConfig {
    let scoring = settings.scoring.clone();
    match mode {
        Some(mode) => scoring.with_mode(mode),
        None => scoring,
    }
}

/// Documents to analyze, in processing order.
pub fn collect_documents(input: &InputSource) -> Result<Vec<PathBuf>> {
    match input {
        InputSource::File(path) => {
            if !io::file_exists(path) {
                bail!("Input file {} does not exist", path.display());
            }
            Ok(vec![path.clone()])
        }
        InputSource::Dir(path) => {
            if !io::dir_exists(path) {
                bail!("Input directory {} does not exist", path.display());
            }
            io::find_documents(path)
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
