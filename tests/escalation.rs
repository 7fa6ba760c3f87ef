// End-to-end checks of the index store and escalation engine,
// including the data file shipped with the binary.

use std::sync::Arc;

use chrono::NaiveDate;
use portfolio_api::incc::{EscalationEngine, IndexLoadError, IndexSeriesStore};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn bundled_data_file_loads() {
    let path = format!("{}/data/incc-m.json", env!("CARGO_MANIFEST_DIR"));
    let store = IndexSeriesStore::from_path(&path).unwrap();

    // Every published month from 2019 through Jul 2025 is present.
    assert!(store.len() >= 72);
    assert_eq!(store.variation(2019, 1), dec("0.32"));
    // Unpublished tail months contribute zero.
    assert_eq!(store.variation(2025, 12), Decimal::ZERO);
}

#[test]
fn documented_scenario_compounds_to_the_cent() {
    // Baseline 100000.00 on 2024-01-15, Jan 0.50% and Feb 0.30%,
    // evaluated 2024-02-20: 100000 * 1.005 * 1.003 = 100801.50.
    let store = IndexSeriesStore::from_json_str(
        r#"{
            "anos": {
                "2024": [
                    { "mes": "Janeiro", "variacao": 0.50 },
                    { "mes": "Fevereiro", "variacao": 0.30 }
                ]
            }
        }"#,
    )
    .unwrap();
    let engine = EscalationEngine::new(Arc::new(store));

    let adjusted = engine
        .adjusted_value_as_of(
            Some(date(2024, 1, 15)),
            Some(dec("100000.00")),
            date(2024, 2, 20),
        )
        .unwrap();

    assert_eq!(adjusted, dec("100801.50"));
}

#[test]
fn future_baseline_passes_through_unchanged() {
    let store = IndexSeriesStore::from_json_str(
        r#"{ "anos": { "2024": [ { "mes": "Janeiro", "variacao": 0.50 } ] } }"#,
    )
    .unwrap();
    let engine = EscalationEngine::new(Arc::new(store));

    let adjusted = engine
        .adjusted_value_as_of(Some(date(2030, 1, 1)), Some(dec("5000.00")), date(2024, 1, 1))
        .unwrap();

    assert_eq!(adjusted, dec("5000.00"));
}

#[test]
fn long_horizon_walk_stays_exact() {
    // A decade of flat 0.10% months: factor = 1.001^120. The engine
    // walks every month exactly; spot-check against a closed-form
    // value computed at full decimal precision.
    let mut months = Vec::new();
    let names = [
        "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto",
        "Setembro", "Outubro", "Novembro", "Dezembro",
    ];
    let mut anos = serde_json::Map::new();
    for year in 2010..2020 {
        months.clear();
        for name in names {
            months.push(serde_json::json!({ "mes": name, "variacao": 0.10 }));
        }
        anos.insert(year.to_string(), serde_json::Value::Array(months.clone()));
    }
    let raw = serde_json::json!({ "anos": anos }).to_string();
    let engine = EscalationEngine::new(Arc::new(IndexSeriesStore::from_json_str(&raw).unwrap()));

    let adjusted = engine
        .adjusted_value_as_of(
            Some(date(2010, 1, 1)),
            Some(dec("100000.00")),
            date(2019, 12, 31),
        )
        .unwrap();

    let factor = dec("1.001");
    let mut acc = Decimal::ONE;
    for _ in 0..120 {
        acc *= factor;
    }
    let expected = (dec("100000.00") * acc)
        .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);

    assert_eq!(adjusted, expected);
}

#[test]
fn typo_in_month_name_prevents_construction() {
    let err = IndexSeriesStore::from_json_str(
        r#"{ "anos": { "2024": [ { "mes": "Jneiro", "variacao": 0.5 } ] } }"#,
    )
    .unwrap_err();

    assert!(matches!(err, IndexLoadError::InvalidMonth(_)));
}

#[test]
fn missing_file_is_a_load_failure() {
    assert!(matches!(
        IndexSeriesStore::from_path("/nonexistent/incc-m.json").unwrap_err(),
        IndexLoadError::Io { .. }
    ));
}
