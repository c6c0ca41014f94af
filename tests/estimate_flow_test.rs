use reno_quote::{
    estimate, BuiltinCatalog, CatalogConfig, CatalogSource, EstimateError, Estimator, QuoteRequest,
};
use reno_quote::utils::validation::Validate;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG_TOML: &str = r#"
[company]
name = "RemontPro"
phone = "+7 (999) 123-45-67"
email = "info@remontpro.ru"

[[services]]
name = "Rough"
unit_price = 3500
description = "Preparing the premises for further finishing"
features = ["Dismantling of old coverings", "Partition walls", "Electrical wiring", "Plumbing work"]

[[services]]
name = "Pre-finish"
unit_price = 2800
description = "Leveling and surface preparation"
features = ["Wall plastering", "Floor screed", "Window installation", "Door installation"]

[[services]]
name = "Finish"
unit_price = 4200
description = "Turnkey final finishing"
features = ["Wall painting", "Floor coverings", "Plumbing fixtures", "Socket installation"]
"#;

#[test]
fn test_end_to_end_estimate_from_catalog_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(CATALOG_TOML.as_bytes()).unwrap();

    let config = CatalogConfig::from_file(temp_file.path()).unwrap();
    config.validate().unwrap();

    let estimator = Estimator::new(config.catalog().unwrap());
    let quote = estimator
        .estimate(&QuoteRequest::new("Finish", "80"))
        .unwrap();

    assert_eq!(quote.total, dec!(336000));
    assert_eq!(quote.category.name, "Finish");
    assert_eq!(quote.category.unit_price, dec!(4200));
}

#[test]
fn test_estimate_failures_against_builtin_catalog() {
    let estimator = Estimator::new(BuiltinCatalog.catalog().unwrap());

    assert!(matches!(
        estimator.estimate(&QuoteRequest::new("Finish", "0")),
        Err(EstimateError::InvalidArea { .. })
    ));
    assert!(matches!(
        estimator.estimate(&QuoteRequest::new("Unknown", "50")),
        Err(EstimateError::UnknownCategory { .. })
    ));
    assert!(matches!(
        estimator.estimate(&QuoteRequest::new("", "50")),
        Err(EstimateError::MissingField { field: "category" })
    ));
}

#[test]
fn test_builtin_catalog_matches_standard_tiers() {
    let catalog = BuiltinCatalog.catalog().unwrap();

    let rough = estimate(&catalog, &QuoteRequest::new("Rough", "100")).unwrap();
    assert_eq!(rough.total, dec!(350000));

    let pre_finish = estimate(&catalog, &QuoteRequest::new("Pre-finish", "100")).unwrap();
    assert_eq!(pre_finish.total, dec!(280000));
}

#[test]
fn test_quote_serializes_for_machine_consumers() {
    let estimator = Estimator::new(BuiltinCatalog.catalog().unwrap());
    let quote = estimator
        .estimate(&QuoteRequest::new("Finish", "80"))
        .unwrap();

    let value = serde_json::to_value(&quote).unwrap();
    assert_eq!(value["category"]["name"], "Finish");
    assert_eq!(value["category"]["unit_price"], "4200");
    assert_eq!(value["area"], "80");
    assert_eq!(value["total"], "336000");
}

#[test]
fn test_fractional_price_rounds_half_up_end_to_end() {
    let toml_content = r#"
[company]
name = "RemontPro"

[[services]]
name = "Custom"
unit_price = 999.995
"#;

    let config = CatalogConfig::from_toml_str(toml_content).unwrap();
    config.validate().unwrap();

    let quote = estimate(
        &config.catalog().unwrap(),
        &QuoteRequest::new("Custom", "1"),
    )
    .unwrap();
    assert_eq!(quote.total, dec!(1000.00));
}
