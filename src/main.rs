use anyhow::Result;
use article_metrics::cli::{Cli, Commands, LexiconArgs};
use article_metrics::commands::{self, AnalyzeConfig, TextConfig};
use article_metrics::config::{self, ArticleMetricsConfig};
use article_metrics::io::OutputFormat;
use article_metrics::observability::init_logging;
use clap::Parser;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity, cli.quiet);

    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        Commands::Analyze {
            input,
            format,
            output,
            url_column,
            dump_text,
            jobs,
            lexicons,
        } => {
            let file_config = config::load_config(cli.config.as_deref())?;
            let format = match format {
                Some(arg) => arg.into(),
                None => default_format(&file_config)?,
            };
            let analyze_config = AnalyzeConfig {
                input,
                url_column: url_column.unwrap_or_else(|| file_config.input.url_column.clone()),
                format,
                output,
                dump_text: dump_text.or_else(|| file_config.output.dump_text_dir.clone()),
                jobs,
                quiet: cli.quiet,
                lexicons: lexicon_config(&file_config, &lexicons),
                fetch: file_config.fetch.clone(),
            };
            commands::handle_analyze(analyze_config)
        }
        Commands::Text {
            path,
            format,
            lexicons,
        } => {
            let file_config = config::load_config(cli.config.as_deref())?;
            commands::handle_text(TextConfig {
                path,
                format: format.into(),
                lexicons: lexicon_config(&file_config, &lexicons),
            })
        }
    }
}

// Pure function to merge CLI word-list overrides into the file config
fn lexicon_config(
    file_config: &ArticleMetricsConfig,
    args: &LexiconArgs,
) -> article_metrics::config::LexiconConfig {
    commands::resolve_lexicon_config(&file_config.lexicons, args)
}

fn default_format(file_config: &ArticleMetricsConfig) -> Result<OutputFormat> {
    match &file_config.output.default_format {
        Some(name) => Ok(name.parse()?),
        None => Ok(OutputFormat::Csv),
    }
}
