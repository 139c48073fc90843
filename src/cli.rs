use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Input columns plus one column per metric
    Csv,
    /// Pretty-printed JSON report
    Json,
    /// Human-readable table
    Terminal,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Terminal => OutputFormat::Terminal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "article-metrics")]
#[command(about = "Readability and sentiment metrics for web articles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to .article-metrics.toml in this or a parent directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Suppress progress bars and non-error logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Word-list overrides shared by the analysis commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LexiconArgs {
    /// Stop-word files (replaces the configured list)
    #[arg(long = "stop-words", value_delimiter = ',')]
    pub stop_words: Option<Vec<PathBuf>>,

    /// Positive word list
    #[arg(long = "positive-words")]
    pub positive_words: Option<PathBuf>,

    /// Negative word list
    #[arg(long = "negative-words")]
    pub negative_words: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and analyze every article listed in an input table
    Analyze {
        /// CSV with a URL column, or a .txt file with one URL per line
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the CSV column holding URLs
        #[arg(long = "url-column")]
        url_column: Option<String>,

        /// Write each article's text to this directory
        #[arg(long = "dump-text")]
        dump_text: Option<PathBuf>,

        /// Number of parallel jobs (0 = all cores, 1 = sequential)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        #[command(flatten)]
        lexicons: LexiconArgs,
    },

    /// Analyze a local text file (`-` reads stdin)
    Text {
        /// Text file to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: FormatArg,

        #[command(flatten)]
        lexicons: LexiconArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_with_overrides() {
        let cli = Cli::try_parse_from([
            "article-metrics",
            "-vv",
            "analyze",
            "input.csv",
            "--format",
            "json",
            "--stop-words",
            "a.txt,b.txt",
            "--jobs",
            "1",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Analyze {
                input,
                format,
                jobs,
                lexicons,
                ..
            } => {
                assert_eq!(input, PathBuf::from("input.csv"));
                assert_eq!(format, Some(FormatArg::Json));
                assert_eq!(jobs, 1);
                assert_eq!(
                    lexicons.stop_words,
                    Some(vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")])
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
