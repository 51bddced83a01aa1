//! Fuzzy Lookup - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds the dictionary trie and
//! then answers approximate-match queries, either one-shot or interactively.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fuzzy_lookup_lib::config::{AppConfig, ConfigLoader, LogConfig, Validate, ENV_PREFIX};
use fuzzy_lookup_lib::dictionary;
use fuzzy_lookup_lib::error::{
    report_error, set_error_reporter, ErrorContext, LookupError, TracingErrorReporter,
};
use fuzzy_lookup_lib::repl::{self, Repl};
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the fuzzy lookup tool.
#[derive(Parser, Debug)]
#[clap(name = "fuzzy_lookup", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list file, overriding the configured dictionary
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Maximum search cost, overriding the configured ceiling
    #[clap(short = 'm', long, value_parser, allow_negative_numbers = true)]
    max_cost: Option<i64>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Answer queries read from standard input
    Repl,

    /// Look up a single word
    Query {
        /// The word to look up
        word: String,

        /// Print the words and their costs as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {e}"))
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(mut config: AppConfig, args: &Args) -> AppConfig {
    if let Some(path) = &args.dictionary {
        config.dictionary.path = Some(path.clone());
    }
    if let Some(max_cost) = args.max_cost {
        config.search.max_cost = max_cost;
    }
    config
}

/// Loads the configuration, reporting failures and exiting on error.
fn load_config(loader: &ConfigLoader, args: &Args) -> AppConfig {
    let config = loader
        .load()
        .map(|config| apply_overrides(config, args))
        .and_then(|config| {
            config.validate()?;
            Ok(config)
        });

    match config {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet, report through the defaults
            let _ = init_logging(&LogConfig::default());
            report_error(&ErrorContext::new(LookupError::Config(e), "config"));
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    set_error_reporter(Arc::new(TracingErrorReporter));

    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.as_ref().unwrap_or(&Command::Repl) {
        Command::Repl => {
            let config = load_config(&loader, &args);
            init_logging(&config.log)?;

            let trie = dictionary::build_trie(&config.dictionary).context("Failed to load dictionary")?;
            let search = config.search.searcher(&trie)?;
            info!(max_cost = search.max_cost(), "Starting interactive lookup");

            Repl::new(search)
                .with_max_results(config.search.max_results)
                .run(io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
        Command::Query { word, json } => {
            let config = load_config(&loader, &args);
            init_logging(&config.log)?;

            let trie = dictionary::build_trie(&config.dictionary).context("Failed to load dictionary")?;
            let mut results = config.search.searcher(&trie)?.run(word).results;
            if let Some(limit) = config.search.max_results {
                results.truncate(limit);
            }

            if *json {
                println!("{}", repl::results_to_json(&results)?);
            } else if results.is_empty() {
                println!("{}", repl::NO_MATCHES);
            } else {
                for result in &results {
                    println!("{}\t{}", result.word, result.cost);
                }
            }
            Ok(())
        }
        Command::Validate => {
            let config = load_config(&loader, &args);
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            let default_config = AppConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }

            let toml = toml::to_string_pretty(&default_config).context("Failed to serialize config")?;
            std::fs::write(output, toml)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
