use ops_import::{
    ImportRow, ImportSimulator, csv_template, drafts_from_rows, validate_rows,
};
use std::collections::HashMap;

fn row(pairs: &[(&str, &str)]) -> ImportRow {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    ImportRow::new(values)
}

fn valid_row() -> ImportRow {
    row(&[
        ("name", "Nairobi Solar Site 1"),
        ("county", "Nairobi"),
        ("address", "123 Solar Avenue"),
        ("latitude", "-1.2921"),
        ("longitude", "36.8219"),
        ("capacity", "5.5"),
        ("status", "active"),
    ])
}

#[test]
fn valid_rows_produce_no_errors() {
    assert!(validate_rows(&[valid_row()]).is_empty());
}

#[test]
fn missing_name_yields_single_name_error() {
    let errors = validate_rows(&[row(&[
        ("county", "Nairobi"),
        ("latitude", "-1.2921"),
        ("longitude", "36.8219"),
    ])]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].row, 1);
    assert_eq!(errors[0].field, "name");
    assert_eq!(errors[0].message, "name is required");
}

#[test]
fn blank_field_counts_as_missing() {
    let errors = validate_rows(&[row(&[
        ("name", "   "),
        ("county", "Nairobi"),
        ("latitude", "-1.2921"),
        ("longitude", "36.8219"),
    ])]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "name");
}

#[test]
fn non_numeric_latitude_yields_single_latitude_error() {
    let errors = validate_rows(&[row(&[
        ("name", "Site 5"),
        ("county", "Nakuru"),
        ("latitude", "invalid"),
        ("longitude", "36.8219"),
    ])]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "latitude");
    assert_eq!(errors[0].message, "Invalid latitude format");
}

#[test]
fn row_numbers_are_one_based() {
    let errors = validate_rows(&[
        valid_row(),
        row(&[
            ("name", "Site 2"),
            ("county", "Kisumu"),
            ("latitude", "-0.1"),
            ("longitude", "not-a-number"),
        ]),
    ]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].row, 2);
    assert_eq!(errors[0].field, "longitude");
}

#[test]
fn drafts_require_clean_rows() {
    let err = drafts_from_rows(&[row(&[("county", "Nairobi")])]).expect_err("errors");
    assert!(!err.is_empty());

    let drafts = drafts_from_rows(&[valid_row()]).expect("drafts");
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].name, "Nairobi Solar Site 1");
    assert_eq!(drafts[0].latitude, -1.2921);
    assert_eq!(drafts[0].capacity_kw, 5.5);
}

#[test]
fn template_is_byte_exact() {
    let expected = "name,county,address,latitude,longitude,capacity,status,contactName,contactPhone,contactEmail\nSite Name,Nairobi,123 Example St,-1.2921,36.8219,5.5,active,John Doe,+254712345678,john@example.com";
    assert_eq!(csv_template(), expected);
}

#[test]
fn simulator_extremes() {
    let drafts = drafts_from_rows(&[valid_row(), valid_row(), valid_row()]).expect("drafts");

    let (accepted, outcome) = ImportSimulator::new(7, 0.0).run(&drafts);
    assert_eq!(accepted, vec![0, 1, 2]);
    assert_eq!(outcome.successful, 3);
    assert_eq!(outcome.failed, 0);

    let (accepted, outcome) = ImportSimulator::new(7, 1.0).run(&drafts);
    assert!(accepted.is_empty());
    assert_eq!(outcome.failed, 3);
    assert_eq!(outcome.errors.len(), 3);
    assert_eq!(outcome.errors[0].message, "Failed to import site");
}

#[test]
fn simulator_is_reproducible() {
    let drafts: Vec<_> = (0..50)
        .map(|_| valid_row())
        .collect::<Vec<_>>();
    let drafts = drafts_from_rows(&drafts).expect("drafts");
    let (first, _) = ImportSimulator::new(42, 0.10).run(&drafts);
    let (second, _) = ImportSimulator::new(42, 0.10).run(&drafts);
    assert_eq!(first, second);
}
