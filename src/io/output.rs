use crate::core::{format_score, SentenceResult, SentimentLabel, NOT_AVAILABLE};
use clap::ValueEnum;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Terminal,
}

impl OutputFormat {
    /// File extension for formats written to the output directory.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Csv => Some("csv"),
            OutputFormat::Json => Some("json"),
            OutputFormat::Terminal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,  // Detect based on terminal
    Never, // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Never => false,
            Self::Auto => std::env::var("NO_COLOR").is_err() && std::io::stdout().is_terminal(),
        }
    }
}

pub const CSV_HEADERS: [&str; 9] = [
    "Sentence ID",
    "Sentence",
    "Sentiment",
    "Sentiment Label",
    "Arousal",
    "Dominance",
    "# Words Found",
    "Found Words",
    "All Words",
];

pub trait OutputWriter {
    fn write_results(&mut self, results: &[SentenceResult]) -> anyhow::Result<()>;
}

pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn into_inner(self) -> anyhow::Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {}", e.error()))
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_results(&mut self, results: &[SentenceResult]) -> anyhow::Result<()> {
        self.writer.write_record(CSV_HEADERS)?;
        for result in results {
            self.writer.write_record(csv_row(result))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// One CSV row in [`CSV_HEADERS`] order.
pub fn csv_row(result: &SentenceResult) -> [String; 9] {
    let found_words = if result.has_matches() {
        format_word_list(&result.found_words)
    } else {
        NOT_AVAILABLE.to_string()
    };

    [
        result.index.to_string(),
        result.sentence.clone(),
        format_score(result.sentiment()),
        result.label.to_string(),
        format_score(result.arousal()),
        format_score(result.dominance()),
        result.words_found_summary(),
        found_words,
        format_word_list(&result.all_words),
    ]
}

/// Render a word list as `['a', 'b']`.
pub fn format_word_list(words: &[String]) -> String {
    let quoted: Vec<String> = words.iter().map(|w| format!("'{w}'")).collect();
    format!("[{}]", quoted.join(", "))
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &[SentenceResult]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

const SENTENCE_PREVIEW_CHARS: usize = 60;

pub struct TerminalWriter<W: Write> {
    writer: W,
    use_color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, color: ColorMode) -> Self {
        Self {
            writer,
            use_color: color.should_use_color(),
        }
    }

    fn label_cell(&self, label: SentimentLabel) -> String {
        if !self.use_color {
            return label.to_string();
        }
        match label {
            SentimentLabel::Positive => label.as_str().green().to_string(),
            SentimentLabel::Negative => label.as_str().red().to_string(),
            SentimentLabel::Neutral => label.as_str().yellow().to_string(),
            SentimentLabel::NotAvailable => label.as_str().dimmed().to_string(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &[SentenceResult]) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            "ID",
            "Sentence",
            "Sentiment",
            "Label",
            "Arousal",
            "Dominance",
            "Words Found",
        ]);

        for result in results {
            table.add_row(vec![
                result.index.to_string(),
                preview(&result.sentence),
                format_score(result.sentiment()),
                self.label_cell(result.label),
                format_score(result.arousal()),
                format_score(result.dominance()),
                result.words_found_summary(),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        self.writer.flush()?;
        Ok(())
    }
}

fn preview(sentence: &str) -> String {
    if sentence.chars().count() <= SENTENCE_PREVIEW_CHARS {
        return sentence.to_string();
    }
    let cut: String = sentence.chars().take(SENTENCE_PREVIEW_CHARS - 3).collect();
    format!("{cut}...")
}

/// Output path for `input` inside `out_dir`, e.g. `Output Anew Sentiment story.csv`.
pub fn output_path(out_dir: &Path, input: &Path, format: OutputFormat) -> Option<PathBuf> {
    let extension = format.extension()?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Some(out_dir.join(format!("Output Anew Sentiment {stem}.{extension}")))
}

/// Writer for one input document. File formats create their output file eagerly.
pub fn create_writer(
    format: OutputFormat,
    out_dir: &Path,
    input: &Path,
    color: ColorMode,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let writer: Box<dyn OutputWriter> = match output_path(out_dir, input, format) {
        Some(path) => {
            let file = BufWriter::new(File::create(&path)?);
            match format {
                OutputFormat::Json => Box::new(JsonWriter::new(file)),
                _ => Box::new(CsvWriter::new(file)),
            }
        }
        None => Box::new(TerminalWriter::new(std::io::stdout(), color)),
    };
    Ok(writer)
}
