//! advcheck: ADV sample field checker.

use std::io::{self, IsTerminal};

use adv_cli::logging::{LogConfig, LogFormat, init_logging};
use adv_cli::report::Styling;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_catalogs, run_correct, run_search};

/// Exit status when `--fail-on-suggestions` is set and suggestions exist.
const EXIT_SUGGESTIONS: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let styling = styling_from_cli(&cli);
    let catalog_dir = cli.catalog_dir.clone();
    let result = match &cli.command {
        Command::Correct(args) => run_correct(catalog_dir, args, styling).map(|has_suggestions| {
            if has_suggestions && args.fail_on_suggestions {
                EXIT_SUGGESTIONS
            } else {
                0
            }
        }),
        Command::Catalogs => run_catalogs(catalog_dir, styling).map(|()| 0),
        Command::Search(args) => run_search(catalog_dir, args, styling).map(|()| 0),
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

fn styling_from_cli(cli: &Cli) -> Styling {
    let color = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    if color { Styling::Color } else { Styling::Plain }
}
