//! Golden file integration tests.
//!
//! Verifies calculation results and both renderings against known
//! values from tests/testdata/calculations_golden.json.

use serde::Deserialize;

use replcalc_core::CalculationRegistry;

#[derive(Deserialize)]
struct GoldenData {
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    a: f64,
    token: String,
    b: f64,
    result: f64,
    render: String,
    debug: String,
}

fn load_golden() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/calculations_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

#[test]
fn golden_results_and_renderings() {
    let registry = CalculationRegistry::with_builtins();
    let golden = load_golden();
    assert!(!golden.values.is_empty());

    for entry in &golden.values {
        let label = format!("{} {} {}", entry.a, entry.token, entry.b);
        let calculation = registry
            .create(entry.a, &entry.token, entry.b)
            .unwrap_or_else(|e| panic!("{label}: {e}"));

        assert_eq!(calculation.execute().unwrap(), entry.result, "{label}");
        assert_eq!(calculation.render().unwrap(), entry.render, "{label}");
        assert_eq!(format!("{calculation:?}"), entry.debug, "{label}");
    }
}

#[test]
fn golden_covers_every_builtin_token() {
    let registry = CalculationRegistry::with_builtins();
    let golden = load_golden();
    for token in registry.tokens() {
        assert!(
            golden.values.iter().any(|entry| entry.token == token),
            "no golden entry for '{token}'"
        );
    }
}
