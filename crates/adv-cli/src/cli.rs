//! Command-line arguments of `advcheck`.

use std::path::PathBuf;

use adv_catalog::CATALOG_DIR_ENV_VAR;
use adv_model::SampleField;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "advcheck",
    version,
    about = "Suggest corrections for ADV-coded fields of lab sample uploads",
    long_about = "Check laboratory sample uploads against the ADV reference catalogs.\n\n\
                  Legacy codes are rewritten deterministically where possible; free-text\n\
                  pathogen names are matched with a fuzzy search over the catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding manifest.toml and the catalog CSV files.
    #[arg(
        long = "catalog-dir",
        value_name = "DIR",
        env = CATALOG_DIR_ENV_VAR,
        global = true
    )]
    pub catalog_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw sample values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Suggest corrections for every sample of an upload file.
    Correct(CorrectArgs),

    /// List the loaded catalogs.
    Catalogs,

    /// Run a catalog's fuzzy index directly.
    Search(SearchArgs),
}

#[derive(Parser)]
pub struct CorrectArgs {
    /// CSV upload with one sample per row.
    #[arg(value_name = "SAMPLES.csv")]
    pub samples: PathBuf,

    /// Report format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,

    /// Write the samples with accepted corrections applied.
    #[arg(long = "write-corrected", value_name = "PATH")]
    pub write_corrected: Option<PathBuf>,

    /// Lowest correction code applied by --write-corrected.
    ///
    /// Fuzzy pathogen matches carry code 0 and are never applied by default.
    #[arg(long = "min-code", value_name = "CODE", default_value_t = 87)]
    pub min_code: u8,

    /// Skip the strategy for a field (repeatable), e.g. --disable pathogen_adv.
    #[arg(long = "disable", value_name = "FIELD")]
    pub disable: Vec<SampleField>,

    /// Exit with status 2 when any suggestion was produced.
    #[arg(long = "fail-on-suggestions")]
    pub fail_on_suggestions: bool,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Catalog name, e.g. adv16.
    #[arg(value_name = "CATALOG")]
    pub catalog: String,

    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Field to score on (repeatable). Defaults to the pathogen index
    /// settings for adv16 and to Text1 otherwise.
    #[arg(long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Maximum number of hits shown.
    #[arg(long = "limit", default_value_t = 20)]
    pub limit: usize,

    /// Report format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
