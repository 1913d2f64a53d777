#![allow(dead_code)]

use std::sync::Arc;

use adv_catalog::{Catalog, CatalogPort, CatalogStore};
use adv_model::{CatalogEntry, SampleData, SampleField, SearchAlias};

fn catalog(name: &str, rows: &[&[(&str, &str)]]) -> Catalog {
    let entries = rows
        .iter()
        .map(|row| row.iter().copied().collect::<CatalogEntry>())
        .collect();
    Catalog::new(name, "Kode", entries).unwrap()
}

pub fn matrix_catalog() -> Catalog {
    catalog(
        "adv3",
        &[
            &[("Kode", "012345"), ("Kodiersystem", "01"), ("Text1", "Milch")],
            &[("Kode", "M1"), ("Kodiersystem", "X"), ("Text1", "Matrix eins")],
            &[("Kode", "M2"), ("Kodiersystem", "Y"), ("Text1", "Matrix zwei")],
            &[("Kode", "M3"), ("Text1", "ohne Kodiersystem")],
        ],
    )
}

pub fn operations_mode_catalog() -> Catalog {
    catalog(
        "adv8",
        &[
            &[("Kode", "1234000"), ("Text1", "Schlachthof")],
            &[("Kode", "56780000"), ("Text1", "Zerlegebetrieb")],
            &[("Kode", "12000000"), ("Text1", "Erzeuger")],
        ],
    )
}

pub fn sampling_location_catalog() -> Catalog {
    catalog(
        "adv9",
        &[
            &[("Kode", "012345"), ("Text1", "Ort A")],
            &[("Kode", "01234567"), ("Text1", "Ort B")],
            &[("Kode", "4711"), ("Text1", "Ort C")],
        ],
    )
}

pub fn process_state_catalog() -> Catalog {
    catalog(
        "adv12",
        &[
            &[("Kode", "007"), ("Text1", "tiefgefroren")],
            &[("Kode", "001"), ("Text1", "roh")],
            &[("Kode", "002"), ("Text1", "roh")],
        ],
    )
}

pub fn pathogen_catalog() -> Catalog {
    catalog(
        "adv16",
        &[
            &[("Kode", "0100001"), ("Text1", "Escherichia coli"), ("P-Code3", "ECO")],
            &[("Kode", "0100002"), ("Text1", "Enterobacter cloacae"), ("P-Code3", "ENC")],
            &[("Kode", "0200001"), ("Text1", "Salmonella Enteritidis"), ("P-Code3", "SAE")],
            &[("Kode", "0200002"), ("Text1", "Salmonella Typhimurium"), ("P-Code3", "SAT")],
            &[("Kode", "0300001"), ("Text1", "Genus Listeria"), ("P-Code3", "LIS")],
            &[("Kode", "0300002"), ("Text1", "Listeria monocytogenes"), ("P-Code3", "LIM")],
            &[("Kode", "0400001"), ("Text1", "Campylobacter jejuni"), ("P-Code3", "CAJ")],
        ],
    )
}

pub fn pathogen_aliases() -> Vec<SearchAlias> {
    vec![
        SearchAlias {
            catalog: "adv16".to_string(),
            token: "Escherichia coli".to_string(),
            alias: vec!["EHEC".to_string(), "STEC".to_string()],
        },
        SearchAlias {
            catalog: "adv16".to_string(),
            token: "Salmonella Typhimurium".to_string(),
            alias: vec!["Salm".to_string()],
        },
        SearchAlias {
            catalog: "adv16".to_string(),
            token: "Salmonella Enteritidis".to_string(),
            alias: vec!["Salm".to_string(), "SE".to_string()],
        },
    ]
}

pub fn store() -> CatalogStore {
    CatalogStore::new()
        .with_catalog(matrix_catalog())
        .with_catalog(operations_mode_catalog())
        .with_catalog(sampling_location_catalog())
        .with_catalog(process_state_catalog())
        .with_catalog(pathogen_catalog())
        .with_aliases(pathogen_aliases())
}

pub fn catalogs() -> Arc<dyn CatalogPort> {
    Arc::new(store())
}

pub fn sample(values: &[(SampleField, &str)]) -> SampleData {
    values
        .iter()
        .map(|(field, value)| (*field, (*value).to_string()))
        .collect()
}

/// A sample with every ADV field present.
pub fn full_sample(values: &[(SampleField, &str)]) -> SampleData {
    let mut data = sample(&[
        (SampleField::SampleId, "S-1"),
        (SampleField::TopicAdv, ""),
        (SampleField::MatrixAdv, ""),
        (SampleField::ProcessStateAdv, ""),
        (SampleField::OperationsModeAdv, ""),
        (SampleField::SamplingLocationAdv, ""),
        (SampleField::PathogenAdv, ""),
    ]);
    for (field, value) in values {
        data.insert(*field, *value);
    }
    data
}
