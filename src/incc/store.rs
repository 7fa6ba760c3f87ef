use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Errors raised while constructing the index store. All of these are
/// startup-fatal: a store that loaded partially would answer lookups
/// silently wrong, so construction either succeeds completely or not
/// at all.
#[derive(Debug, Error)]
pub enum IndexLoadError {
    #[error("cannot read index data file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed index data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid month name: {0}")]
    InvalidMonth(String),

    #[error("invalid year label: {0}")]
    InvalidYear(String),
}

/// On-disk layout of the INCC-M series: variations grouped per year,
/// each year carrying up to twelve named-month entries. Months whose
/// figure has not been published yet come through as `variacao: null`.
#[derive(Debug, Deserialize)]
struct IndexDocument {
    anos: BTreeMap<String, Vec<MonthEntry>>,
}

#[derive(Debug, Deserialize)]
struct MonthEntry {
    mes: String,
    variacao: Option<Decimal>,
}

/// Monthly percentage variations of the escalation index, keyed by
/// (year, month). Built once at startup and never mutated afterward,
/// so it can be shared across request handlers without locking.
#[derive(Debug, Default)]
pub struct IndexSeriesStore {
    observations: BTreeMap<(i32, u32), Decimal>,
}

/// Canonical month names as published in the source series
/// (Brazilian Portuguese), index 0 = January.
const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

fn month_number(name: &str) -> Result<u32, IndexLoadError> {
    let wanted = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| *m == wanted)
        .map(|i| i as u32 + 1)
        .ok_or_else(|| IndexLoadError::InvalidMonth(name.to_string()))
}

impl IndexSeriesStore {
    /// Load the series from a JSON file. Called once during process
    /// initialization; errors here abort startup.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IndexLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| IndexLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let store = Self::from_json_str(&raw)?;
        info!(
            "Loaded {} monthly index observations from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, IndexLoadError> {
        let document: IndexDocument = serde_json::from_str(raw)?;

        let mut observations = BTreeMap::new();
        for (year_label, months) in &document.anos {
            let year: i32 = year_label
                .parse()
                .map_err(|_| IndexLoadError::InvalidYear(year_label.clone()))?;

            for entry in months {
                if let Some(variation) = entry.variacao {
                    let month = month_number(&entry.mes)?;
                    observations.insert((year, month), variation);
                }
            }
        }

        Ok(Self { observations })
    }

    /// Monthly percentage variation for (year, month). A month with no
    /// published observation contributes zero variation, which is a
    /// legitimate state (series not yet published, or predating the
    /// series), not an error.
    pub fn variation(&self, year: i32, month: u32) -> Decimal {
        self.observations
            .get(&(year, month))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_named_months_and_skips_unpublished() {
        let store = IndexSeriesStore::from_json_str(
            r#"{
                "anos": {
                    "2024": [
                        { "mes": "Janeiro", "variacao": 0.50 },
                        { "mes": "Fevereiro", "variacao": 0.30 },
                        { "mes": "Março", "variacao": null }
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.variation(2024, 1), "0.50".parse().unwrap());
        assert_eq!(store.variation(2024, 2), "0.30".parse().unwrap());
    }

    #[test]
    fn month_names_match_case_insensitively() {
        let store = IndexSeriesStore::from_json_str(
            r#"{ "anos": { "2023": [ { "mes": "DEZEMBRO", "variacao": 0.61 } ] } }"#,
        )
        .unwrap();

        assert_eq!(store.variation(2023, 12), "0.61".parse().unwrap());
    }

    #[test]
    fn missing_month_is_zero_not_an_error() {
        let store = IndexSeriesStore::from_json_str(r#"{ "anos": {} }"#).unwrap();
        assert_eq!(store.variation(1999, 7), Decimal::ZERO);
        assert!(store.is_empty());
    }

    #[test]
    fn unrecognized_month_name_is_fatal() {
        let err = IndexSeriesStore::from_json_str(
            r#"{ "anos": { "2024": [ { "mes": "Januray", "variacao": 0.1 } ] } }"#,
        )
        .unwrap_err();

        assert!(matches!(err, IndexLoadError::InvalidMonth(name) if name == "Januray"));
    }

    #[test]
    fn non_numeric_year_label_is_fatal() {
        let err = IndexSeriesStore::from_json_str(
            r#"{ "anos": { "twenty-four": [ { "mes": "Janeiro", "variacao": 0.1 } ] } }"#,
        )
        .unwrap_err();

        assert!(matches!(err, IndexLoadError::InvalidYear(_)));
    }

    #[test]
    fn malformed_document_is_fatal() {
        assert!(matches!(
            IndexSeriesStore::from_json_str("not json").unwrap_err(),
            IndexLoadError::Malformed(_)
        ));
    }
}
