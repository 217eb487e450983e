use clap::{Args, Parser, Subcommand};
use email_features::{
    CorpusSource, DEFAULT_SHORT_NAME_MARKER, ExtractionOptions, PathTemplate, PipelineConfig,
    RunConfig, run_pipeline,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every document at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute every run described by a JSON configuration file
    Run {
        /// Path to the configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Extract one output set configured from the command line
    Extract(ExtractArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// Label file with `<label> <file name>` lines
    #[arg(short, long)]
    labels: PathBuf,

    /// Output path template, e.g. `data/payload{}.data`
    #[arg(short, long)]
    output: PathTemplate,

    /// Process every matching file in this directory
    #[arg(long, conflicts_with = "files", required_unless_present = "files")]
    dir: Option<PathBuf>,

    /// File extension used with --dir
    #[arg(long, default_value = "eml")]
    extension: String,

    /// Process these files, in order
    #[arg(long, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Short names for label lookup start at this marker
    #[arg(long, default_value = DEFAULT_SHORT_NAME_MARKER)]
    marker: String,

    /// Strip markup tags before tokenizing
    #[arg(long)]
    strip_markup: bool,

    /// Lowercase text before tokenizing
    #[arg(long)]
    case_insensitive: bool,

    /// Comma-separated n-gram orders
    #[arg(long, value_delimiter = ',', default_value = "1")]
    orders: Vec<usize>,

    /// Keep whitespace runs as they are
    #[arg(long)]
    no_normalize_whitespace: bool,

    /// Use characters instead of words
    #[arg(long)]
    by_character: bool,

    /// Fail on payloads that are not valid UTF-8
    #[arg(long)]
    strict_decoding: bool,
}

impl ExtractArgs {
    fn into_config(self) -> PipelineConfig {
        let corpus = match self.dir {
            Some(path) => CorpusSource::Directory {
                path,
                extension: self.extension,
            },
            None => CorpusSource::Files { paths: self.files },
        };

        PipelineConfig {
            label_file: self.labels,
            corpus,
            short_name_marker: self.marker,
            strict_decoding: self.strict_decoding,
            runs: vec![RunConfig {
                name: "extract".into(),
                output_template: self.output,
                options: ExtractionOptions {
                    include_markup: !self.strip_markup,
                    case_insensitive: self.case_insensitive,
                    ngram_orders: self.orders,
                    normalize_whitespace: !self.no_normalize_whitespace,
                    by_character: self.by_character,
                },
            }],
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.command {
        Commands::Run { config } => match PipelineConfig::load(&config) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        Commands::Extract(args) => args.into_config(),
    };

    match run_pipeline(&config) {
        Ok(summaries) => {
            match serde_json::to_string_pretty(&summaries) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::warn!("Could not serialize run summary: {e}"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
