use std::path::PathBuf;

use adv_catalog::default_catalog_dir;
use adv_cli::pipeline::{
    CorrectOptions, correct_file, load_catalogs, search_catalog, search_options,
};
use adv_cli::report::{JsonReport, Styling, catalog_table, render_correction_report, search_table};
use adv_model::CorrectionCode;
use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{CorrectArgs, OutputArg, SearchArgs};

/// Runs `correct`. Returns whether any suggestion was produced.
pub fn run_correct(catalog_dir: Option<PathBuf>, args: &CorrectArgs, styling: Styling) -> Result<bool> {
    let loaded = load_catalogs(&catalog_dir.unwrap_or_else(default_catalog_dir))?;
    let options = CorrectOptions {
        disabled: args.disable.clone(),
        apply_min_code: args
            .write_corrected
            .as_ref()
            .map(|_| CorrectionCode::new(args.min_code)),
    };
    let outcome = correct_file(&loaded, &args.samples, &options)?;

    if let Some(path) = &args.write_corrected {
        outcome.table.write_csv(path)?;
        info!(
            path = %path.display(),
            applied = outcome.applied,
            "corrected samples written"
        );
    }

    match args.output {
        OutputArg::Json => {
            let json = JsonReport::new(&outcome.report, outcome.applied);
            let text = serde_json::to_string_pretty(&json).context("serialize report")?;
            println!("{text}");
        }
        OutputArg::Table => {
            print!(
                "{}",
                render_correction_report(&outcome.report, outcome.applied, styling)
            );
        }
    }
    Ok(outcome.report.has_suggestions())
}

pub fn run_catalogs(catalog_dir: Option<PathBuf>, styling: Styling) -> Result<()> {
    let dir = catalog_dir.unwrap_or_else(default_catalog_dir);
    let loaded = load_catalogs(&dir)?;
    println!("Catalogs in {}:", loaded.root.display());
    println!("{}", catalog_table(&loaded.store, styling));
    Ok(())
}

pub fn run_search(catalog_dir: Option<PathBuf>, args: &SearchArgs, styling: Styling) -> Result<()> {
    let loaded = load_catalogs(&catalog_dir.unwrap_or_else(default_catalog_dir))?;
    let options = search_options(&loaded, &args.catalog, &args.fields);
    let mut hits = search_catalog(&loaded.store, &args.catalog, &args.query, &options)?;
    hits.truncate(args.limit);

    match args.output {
        OutputArg::Json => {
            let text = serde_json::to_string_pretty(&hits).context("serialize hits")?;
            println!("{text}");
        }
        OutputArg::Table if hits.is_empty() => println!("No matches for {:?}.", args.query),
        OutputArg::Table => println!("{}", search_table(&hits, styling)),
    }
    Ok(())
}
