#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use adv_cli::pipeline::{
    CorrectOptions, build_engine, correct_file, load_catalogs, search_catalog, search_options,
};
use adv_cli::report::{JsonReport, Styling, catalog_table, render_correction_report, search_table};
use adv_model::{CorrectionCode, SampleField};
use tempfile::TempDir;

const MANIFEST: &str = r#"
aliases = "aliases.json"

[manifest]
schema = "adv-catalogs"
schema_version = 1

[[catalogs]]
name = "adv3"
path = "adv3.csv"

[[catalogs]]
name = "adv8"
path = "adv8.csv"

[[catalogs]]
name = "adv9"
path = "adv9.csv"

[[catalogs]]
name = "adv12"
path = "adv12.csv"

[[catalogs]]
name = "adv16"
path = "adv16.csv"
"#;

const SAMPLES: &str = "\
sample_id,topic_adv,matrix_adv,process_state_adv,operations_mode_adv,sampling_location_adv,pathogen_adv,lab_note
A,,12345,07,1234xxx,,Listeria,keep
B,X,M1,007,1234000,012345,,
C,,,,,,EHEC,
D
";

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "manifest.toml", MANIFEST);
    write(
        root,
        "adv3.csv",
        "Kode,Kodiersystem,Text1\n012345,01,Milch\nM1,X,Matrix eins\n",
    );
    write(root, "adv8.csv", "Kode,Text1\n1234000,Schlachthof\n");
    write(root, "adv9.csv", "Kode,Text1\n012345,Ort A\n");
    write(
        root,
        "adv12.csv",
        "Kode,Text1\n007,tiefgefroren\n001,roh\n",
    );
    write(
        root,
        "adv16.csv",
        "Kode,Text1,P-Code3\n\
         0100001,Escherichia coli,ECO\n\
         0100002,Enterobacter cloacae,ENC\n\
         0200001,Salmonella Enteritidis,SAE\n\
         0200002,Salmonella Typhimurium,SAT\n\
         0300001,Genus Listeria,LIS\n\
         0300002,Listeria monocytogenes,LIM\n\
         0400001,Campylobacter jejuni,CAJ\n",
    );
    write(
        root,
        "aliases.json",
        r#"[{"catalog": "adv16", "token": "Escherichia coli", "alias": ["EHEC", "STEC"]}]"#,
    );
    write(root, "samples.csv", SAMPLES);
    dir
}

fn apply_options() -> CorrectOptions {
    CorrectOptions {
        disabled: Vec::new(),
        apply_min_code: Some(CorrectionCode::PATHOGEN_CODE),
    }
}

#[test]
fn json_report_snapshot() {
    let dir = workspace();
    let loaded = load_catalogs(dir.path()).unwrap();
    let outcome = correct_file(&loaded, &dir.path().join("samples.csv"), &apply_options()).unwrap();

    insta::assert_json_snapshot!(
        "correct_report",
        JsonReport::new(&outcome.report, outcome.applied)
    );
}

#[test]
fn accepted_corrections_are_written_back() {
    let dir = workspace();
    let loaded = load_catalogs(dir.path()).unwrap();
    let outcome = correct_file(&loaded, &dir.path().join("samples.csv"), &apply_options()).unwrap();
    assert_eq!(outcome.applied, 4);

    let out = dir.path().join("corrected.csv");
    outcome.table.write_csv(&out).unwrap();
    let written = fs::read_to_string(out).unwrap();
    // The fuzzy alias offer for sample C has code 0 and stays unapplied.
    assert_eq!(
        written,
        "sample_id,topic_adv,matrix_adv,process_state_adv,operations_mode_adv,sampling_location_adv,pathogen_adv,lab_note\n\
         A,,012345,007,1234000,,Genus Listeria,keep\n\
         B,X,M1,007,1234000,012345,,\n\
         C,,,,,,EHEC,\n\
         D,,,,,,,\n"
    );
}

#[test]
fn min_code_zero_applies_fuzzy_offers() {
    let dir = workspace();
    let loaded = load_catalogs(dir.path()).unwrap();
    let options = CorrectOptions {
        disabled: Vec::new(),
        apply_min_code: Some(CorrectionCode::UNVERIFIED),
    };
    let outcome = correct_file(&loaded, &dir.path().join("samples.csv"), &options).unwrap();
    assert_eq!(outcome.applied, 5);
    assert_eq!(
        outcome.table.samples()[2].get(SampleField::PathogenAdv),
        Some("Escherichia coli")
    );
}

#[test]
fn report_without_apply_leaves_table_untouched() {
    let dir = workspace();
    let loaded = load_catalogs(dir.path()).unwrap();
    let options = CorrectOptions {
        disabled: vec![SampleField::PathogenAdv],
        apply_min_code: None,
    };
    let outcome = correct_file(&loaded, &dir.path().join("samples.csv"), &options).unwrap();
    assert_eq!(outcome.applied, 0);
    assert_eq!(outcome.report.suggestion_count(), 3);
    // Sample D still fails for the five remaining strategies.
    assert_eq!(outcome.report.failure_count(), 5);
    assert_eq!(
        outcome.table.samples()[0].get(SampleField::MatrixAdv),
        Some("12345")
    );
}

#[test]
fn disabling_a_field_without_strategy_fails() {
    let dir = workspace();
    let loaded = load_catalogs(dir.path()).unwrap();
    let error = build_engine(&loaded, &[SampleField::Comment])
        .err()
        .unwrap();
    assert!(error.to_string().contains("comment"));
}

#[test]
fn missing_catalog_dir_is_reported() {
    let dir = TempDir::new().unwrap();
    let error = load_catalogs(&dir.path().join("nowhere")).unwrap_err();
    assert!(format!("{error:#}").contains("load catalogs"));
}

#[test]
fn table_report_lists_suggestions_and_failures() {
    let dir = workspace();
    let loaded = load_catalogs(dir.path()).unwrap();
    let outcome = correct_file(&loaded, &dir.path().join("samples.csv"), &apply_options()).unwrap();
    let text = render_correction_report(&outcome.report, outcome.applied, Styling::Plain);

    assert!(text.starts_with("Suggestions:\n"));
    assert!(text.contains("Failures:\n"));
    assert!(text.contains("pathogen_adv (ADV-16)"));
    assert!(text.contains("Genus Listeria"));
    assert!(text.contains("sample has no topic_adv field"));
    assert!(text.contains("TOTAL"));
    assert!(text.ends_with("4 samples, 5 suggestions, 6 failures, 4 corrections applied\n"));
    // Plain output carries no escape sequences.
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn catalog_listing() {
    let dir = workspace();
    let loaded = load_catalogs(dir.path()).unwrap();
    let text = catalog_table(&loaded.store, Styling::Plain).to_string();
    for name in ["adv3", "adv8", "adv9", "adv12", "adv16"] {
        assert!(text.contains(name), "missing {name}");
    }
    assert!(text.contains("Aliases"));
}

#[test]
fn search_uses_pathogen_index_by_default() {
    let dir = workspace();
    let loaded = load_catalogs(dir.path()).unwrap();
    let options = search_options(&loaded, "ADV16", &[]);
    assert_eq!(options, adv_search::FuzzyIndexOptions::default());

    let hits = search_catalog(&loaded.store, "adv16", "Salmonella", &options).unwrap();
    let items: Vec<_> = hits.iter().take(2).map(|hit| hit.item.as_str()).collect();
    assert_eq!(
        items,
        vec!["Salmonella Enteritidis", "Salmonella Typhimurium"]
    );
    assert!(search_table(&hits, Styling::Plain).to_string().contains("Salmonella"));
}

#[test]
fn search_with_unknown_field_fails() {
    let dir = workspace();
    let loaded = load_catalogs(dir.path()).unwrap();
    let options = search_options(&loaded, "adv12", &["Text9".to_string()]);
    assert!(search_catalog(&loaded.store, "adv12", "roh", &options).is_err());

    let options = search_options(&loaded, "adv12", &[]);
    let hits = search_catalog(&loaded.store, "adv12", "roh", &options).unwrap();
    assert_eq!(hits[0].item, "roh");
}
