use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use super::store::IndexSeriesStore;

#[derive(Debug, Error)]
pub enum EscalationError {
    #[error("property registry date or value is missing")]
    MissingBaseline,
}

/// Compounds a property's registered value forward to the present by
/// walking the monthly index series. Monthly compounding (rather than
/// an annualized approximation) matches how the index is published;
/// baselines can predate the as-of date by decades, so the walk is
/// exact per-month decimal arithmetic.
#[derive(Clone)]
pub struct EscalationEngine {
    store: Arc<IndexSeriesStore>,
}

impl EscalationEngine {
    pub fn new(store: Arc<IndexSeriesStore>) -> Self {
        Self { store }
    }

    /// Adjusted present value for a (registry date, registered value)
    /// baseline, evaluated as of today.
    pub fn adjusted_value(
        &self,
        registry_date: Option<NaiveDate>,
        registered_value: Option<Decimal>,
    ) -> Result<Decimal, EscalationError> {
        self.adjusted_value_as_of(registry_date, registered_value, Local::now().date_naive())
    }

    /// Same computation with an explicit as-of date.
    ///
    /// The walk is inclusive on both ends: the baseline month's full
    /// factor is applied even for a registration late in that month,
    /// and the as-of month's factor is applied even mid-month. A
    /// baseline after the as-of date returns the registered value
    /// unchanged; future-dated registrations are not an error.
    pub fn adjusted_value_as_of(
        &self,
        registry_date: Option<NaiveDate>,
        registered_value: Option<Decimal>,
        as_of: NaiveDate,
    ) -> Result<Decimal, EscalationError> {
        let (start, value) = match (registry_date, registered_value) {
            (Some(date), Some(value)) => (date, value),
            _ => return Err(EscalationError::MissingBaseline),
        };

        if start > as_of {
            return Ok(value);
        }

        let end = (as_of.year(), as_of.month());
        let (mut year, mut month) = (start.year(), start.month());

        let mut factor = Decimal::ONE;
        while (year, month) <= end {
            let variation = self.store.variation(year, month);
            // 1 + variation/100, carried to 10 fractional digits so the
            // product does not drift across hundreds of months.
            let monthly = Decimal::ONE
                + (variation / Decimal::ONE_HUNDRED)
                    .round_dp_with_strategy(10, RoundingStrategy::MidpointAwayFromZero);
            factor *= monthly;

            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        // Half-up to cents, the conventional currency rounding.
        Ok((value * factor).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine_with(entries: &[((i32, u32), &str)]) -> EscalationEngine {
        // Build through the JSON loader so tests exercise the same
        // path production does.
        let months = [
            "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto",
            "Setembro", "Outubro", "Novembro", "Dezembro",
        ];
        let mut anos: std::collections::BTreeMap<String, Vec<serde_json::Value>> =
            std::collections::BTreeMap::new();
        for ((year, month), variation) in entries {
            anos.entry(year.to_string()).or_default().push(serde_json::json!({
                "mes": months[*month as usize - 1],
                "variacao": variation.parse::<f64>().unwrap(),
            }));
        }
        let raw = serde_json::json!({ "anos": anos }).to_string();
        EscalationEngine::new(Arc::new(IndexSeriesStore::from_json_str(&raw).unwrap()))
    }

    #[test]
    fn compounds_inclusive_month_range() {
        // 100000.00 at 2024-01-15; Jan 0.50%, Feb 0.30%; as-of 2024-02-20.
        // factor = 1.005 * 1.003 = 1.008015 => 100801.50
        let engine = engine_with(&[((2024, 1), "0.50"), ((2024, 2), "0.30")]);

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
    fn future_baseline_returns_value_unchanged() {
        let engine = engine_with(&[((2024, 1), "0.50")]);

        let adjusted = engine
            .adjusted_value_as_of(
                Some(date(2030, 1, 1)),
                Some(dec("123456.78")),
                date(2024, 1, 1),
            )
            .unwrap();

        assert_eq!(adjusted, dec("123456.78"));
    }

    #[test]
    fn baseline_month_factor_applies_on_same_day() {
        // Same-day baseline still compounds that month's full factor.
        let engine = engine_with(&[((2024, 3), "1.00")]);

        let adjusted = engine
            .adjusted_value_as_of(
                Some(date(2024, 3, 10)),
                Some(dec("1000.00")),
                date(2024, 3, 10),
            )
            .unwrap();

        assert_eq!(adjusted, dec("1010.00"));
    }

    #[test]
    fn same_day_with_no_observation_is_identity() {
        let engine = engine_with(&[]);

        let adjusted = engine
            .adjusted_value_as_of(
                Some(date(2024, 3, 10)),
                Some(dec("1000.00")),
                date(2024, 3, 10),
            )
            .unwrap();

        assert_eq!(adjusted, dec("1000.00"));
    }

    #[test]
    fn unpublished_months_contribute_no_growth() {
        // Only Feb has an observation; Jan and Mar pass through.
        let engine = engine_with(&[((2024, 2), "2.00")]);

        let adjusted = engine
            .adjusted_value_as_of(
                Some(date(2024, 1, 1)),
                Some(dec("500.00")),
                date(2024, 3, 31),
            )
            .unwrap();

        assert_eq!(adjusted, dec("510.00"));
    }

    #[test]
    fn walk_crosses_year_boundaries() {
        let engine = engine_with(&[((2023, 12), "1.00"), ((2024, 1), "1.00")]);

        let adjusted = engine
            .adjusted_value_as_of(
                Some(date(2023, 12, 1)),
                Some(dec("10000.00")),
                date(2024, 1, 31),
            )
            .unwrap();

        // 10000 * 1.01 * 1.01 = 10201.00
        assert_eq!(adjusted, dec("10201.00"));
    }

    #[test]
    fn negative_variation_deflates() {
        let engine = engine_with(&[((2024, 1), "-1.00")]);

        let adjusted = engine
            .adjusted_value_as_of(
                Some(date(2024, 1, 1)),
                Some(dec("1000.00")),
                date(2024, 1, 31),
            )
            .unwrap();

        assert_eq!(adjusted, dec("990.00"));
    }

    #[test]
    fn incremental_equals_batch_compounding() {
        let engine = engine_with(&[
            ((2024, 1), "0.47"),
            ((2024, 2), "0.61"),
            ((2024, 3), "0.23"),
        ]);

        let batch = engine
            .adjusted_value_as_of(
                Some(date(2024, 1, 1)),
                Some(dec("250000.00")),
                date(2024, 3, 31),
            )
            .unwrap();

        // Compound month by month against the running value. Each step
        // rounds to cents, so allow the one-cent slack that sequential
        // currency rounding can introduce.
        let mut running = dec("250000.00");
        for month in 1..=3 {
            running = engine
                .adjusted_value_as_of(
                    Some(date(2024, month, 1)),
                    Some(running),
                    date(2024, month, 28),
                )
                .unwrap();
        }

        let diff = (batch - running).abs();
        assert!(diff <= dec("0.01"), "batch {} vs incremental {}", batch, running);
    }

    #[test]
    fn computation_is_idempotent() {
        let engine = engine_with(&[((2022, 6), "0.91"), ((2022, 7), "1.12")]);

        let first = engine
            .adjusted_value_as_of(
                Some(date(2022, 6, 15)),
                Some(dec("75000.00")),
                date(2022, 7, 15),
            )
            .unwrap();
        let second = engine
            .adjusted_value_as_of(
                Some(date(2022, 6, 15)),
                Some(dec("75000.00")),
                date(2022, 7, 15),
            )
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_baseline_fields_are_rejected() {
        let engine = engine_with(&[]);

        assert!(matches!(
            engine.adjusted_value(None, Some(dec("1.00"))),
            Err(EscalationError::MissingBaseline)
        ));
        assert!(matches!(
            engine.adjusted_value(Some(date(2024, 1, 1)), None),
            Err(EscalationError::MissingBaseline)
        ));
    }
}
