use anew_sentiment::cli::{self, Commands};
use anew_sentiment::commands::{self, AnalyzeConfig, AnalyzeSummary, InputSource};
use anew_sentiment::io::ColorMode;
use anew_sentiment::observability::init_tracing;
use anyhow::Result;
use colored::*;

fn main() -> Result<()> {
    let cli = cli::parse_args();

    match cli.command {
        Commands::Analyze {
            file,
            dir,
            out,
            mode,
            format,
            lexicon,
            stopwords,
            config,
            jobs,
            parallel,
            plain,
            verbosity,
            quiet,
        } => {
            init_tracing(verbosity, quiet);
            configure_colors(plain);
            cli::configure_thread_pool(jobs);

            let input = select_input(file, dir)?;
            let config = AnalyzeConfig {
                input,
                out,
                mode,
                format,
                lexicon,
                stopwords,
                config,
                parallel,
                color: color_mode(plain),
                quiet,
            };
            let summary = commands::handle_analyze(config)?;
            if !quiet && summary.wants_summary() {
                print_summary(&summary);
            }
            Ok(())
        }
        Commands::Init { force } => {
            init_tracing(0, false);
            commands::init_config(force)
        }
    }
}

// clap guarantees exactly one of the two is present
fn select_input(
    file: Option<std::path::PathBuf>,
    dir: Option<std::path::PathBuf>,
) -> Result<InputSource> {
    match (file, dir) {
        (Some(file), None) => Ok(InputSource::File(file)),
        (None, Some(dir)) => Ok(InputSource::Dir(dir)),
        _ => Err(anyhow::anyhow!("Exactly one of --file or --dir is required")),
    }
}

fn color_mode(plain: bool) -> ColorMode {
    if plain {
        ColorMode::Never
    } else {
        ColorMode::Auto
    }
}

fn configure_colors(plain: bool) {
    if !color_mode(plain).should_use_color() {
        colored::control::set_override(false);
    }
}

fn print_summary(summary: &AnalyzeSummary) {
    eprintln!(
        "{} Scored {} sentences in {} documents ({} empty)",
        "✓".green(),
        summary.sentences,
        summary.documents,
        summary.skipped_empty
    );
    for output in &summary.outputs {
        eprintln!("  {}", output.display().to_string().dimmed());
    }
}
