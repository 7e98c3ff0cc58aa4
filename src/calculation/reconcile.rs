//! Reconciliation against reported totals.
//!
//! Compares a computed total with the externally reported one and raises
//! advisory alerts. Alerts never block anything: a record with alerts is
//! still consolidated and exported, flagged for human review.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::config::CalcConfig;
use crate::error::EngineResult;
use crate::models::{Alert, AlertKind, PeriodInput, ReconciliationRecord, ReportedFigures};
use crate::table::{LevelTable, MonthlyReport};

use super::compute::compute;
use super::proration::PRORATION_DAYS;

/// The review threshold for the earnings difference, in currency units.
pub fn difference_threshold() -> Decimal {
    Decimal::from(1000)
}

/// Signed difference `reported - calculated`, rounded to 2 decimals.
pub fn difference(reported_total: Decimal, total_calculated: Decimal) -> Decimal {
    (reported_total - total_calculated).round_dp(2)
}

/// Evaluates the advisory alert conditions independently.
///
/// - `|difference|` strictly above the review threshold;
/// - days worked above the 30-day reference;
/// - non-positive hourly rate;
/// - an unrecognized transport flag consulted during `Auto` resolution.
pub fn collect_alerts(
    difference: Decimal,
    days_worked: u32,
    hourly_rate: Decimal,
    unrecognized_flag: Option<&str>,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if difference.abs() > difference_threshold() {
        alerts.push(Alert::new(
            AlertKind::DifferenceExceedsThreshold,
            format!(
                "Earnings difference of ${} exceeds the ${} review threshold",
                difference,
                difference_threshold()
            ),
        ));
    }

    if days_worked > PRORATION_DAYS {
        alerts.push(Alert::new(
            AlertKind::DaysExceedPeriod,
            format!(
                "Days worked ({}) exceeds the {}-day reference period",
                days_worked, PRORATION_DAYS
            ),
        ));
    }

    if hourly_rate <= Decimal::ZERO {
        alerts.push(Alert::new(
            AlertKind::InvalidHourlyRate,
            "Hourly rate is not valid (check base salary and monthly hours)",
        ));
    }

    if let Some(raw) = unrecognized_flag {
        alerts.push(Alert::new(
            AlertKind::UnrecognizedTransportFlag,
            format!(
                "Transport allowance flag '{}' was not recognized; allowance treated as not payable",
                raw
            ),
        ));
    }

    alerts
}

/// Evaluates one person's period entry end to end.
///
/// Looks up the salary level, computes the breakdown, resolves the reported
/// figures, and reconciles. Reported figures come from `reported_override`
/// when the caller entered them manually; otherwise from the monthly report
/// by exact id match (first match wins); otherwise they stay at zero.
///
/// # Errors
///
/// Returns an error for an invalid configuration or an unknown level.
/// Threshold breaches are returned as alerts on the record, never as
/// errors.
pub fn evaluate(
    levels: &LevelTable,
    report: Option<&MonthlyReport>,
    input: &PeriodInput,
    reported_override: Option<ReportedFigures>,
    config: &CalcConfig,
) -> EngineResult<ReconciliationRecord> {
    config.validate()?;

    let level = levels.get(&input.level)?;
    let outcome = compute(level, input, config);
    let total_calculated = outcome.breakdown.total();

    let reported = reported_override.unwrap_or_else(|| {
        report
            .map(|r| r.reported_figures(&input.id))
            .unwrap_or_default()
    });

    let difference = difference(reported.total, total_calculated);
    let alerts = collect_alerts(
        difference,
        input.days_worked,
        outcome.hourly_rate,
        outcome.transport.unrecognized_flag.as_deref(),
    );

    info!(
        person_id = %input.id,
        level = %input.level,
        total_calculated = %total_calculated,
        difference = %difference,
        alerts = alerts.len(),
        "Period entry evaluated"
    );

    Ok(ReconciliationRecord {
        record_id: Uuid::new_v4(),
        created_at: Utc::now(),
        id: input.id.clone(),
        name: input.name.clone(),
        level: input.level.clone(),
        days_worked: input.days_worked,
        breakdown: outcome.breakdown,
        total_calculated,
        reported_total: reported.total,
        reported_net: reported.net,
        difference,
        alerts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::TransportSelection;
    use crate::table::{Cell, Dataset};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn level_table() -> LevelTable {
        let dataset = Dataset::new(
            vec![
                "nivel".to_string(),
                "salario_base".to_string(),
                "aplica_aux_transporte".to_string(),
            ],
            vec![
                vec![text("A1"), Cell::Number(dec("1200000")), text("Sí")],
                vec![text("A2"), Cell::Number(dec("0")), text("No")],
            ],
        );
        LevelTable::from_dataset(&dataset).unwrap()
    }

    fn monthly_report() -> MonthlyReport {
        let dataset = Dataset::new(
            vec![
                "cedula".to_string(),
                "total_devengado_reportado".to_string(),
                "neto_reportado".to_string(),
            ],
            vec![vec![
                text("1032456789"),
                Cell::Number(dec("1405000")),
                Cell::Number(dec("1300000")),
            ]],
        );
        MonthlyReport::from_dataset(&dataset).unwrap()
    }

    fn input(id: &str, level: &str, days: u32) -> PeriodInput {
        PeriodInput {
            id: id.to_string(),
            name: "Ana Torres".to_string(),
            level: level.to_string(),
            days_worked: days,
            ordinary_day_hours: Decimal::ZERO,
            overtime_day_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            food_allowance: Decimal::ZERO,
            retroactive_bonuses: Decimal::ZERO,
            other_earnings: Decimal::ZERO,
            transport: TransportSelection::Auto,
        }
    }

    #[test]
    fn test_difference_is_reported_minus_calculated() {
        assert_eq!(difference(dec("1500"), dec("1000")), dec("500.00"));
        assert_eq!(difference(dec("1000"), dec("1500")), dec("-500.00"));
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(collect_alerts(dec("1000.00"), 30, dec("5000"), None).is_empty());

        let alerts = collect_alerts(dec("1000.01"), 30, dec("5000"), None);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::DifferenceExceedsThreshold);

        let negative = collect_alerts(dec("-1000.01"), 30, dec("5000"), None);
        assert_eq!(negative.len(), 1);
    }

    #[test]
    fn test_days_alert_above_thirty() {
        assert!(collect_alerts(dec("0"), 30, dec("5000"), None).is_empty());

        let alerts = collect_alerts(dec("0"), 31, dec("5000"), None);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::DaysExceedPeriod);
    }

    #[test]
    fn test_invalid_rate_alert() {
        let alerts = collect_alerts(dec("0"), 30, Decimal::ZERO, None);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::InvalidHourlyRate);
    }

    #[test]
    fn test_alerts_accumulate_independently() {
        let alerts = collect_alerts(dec("2000"), 31, Decimal::ZERO, Some("tal vez"));
        let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AlertKind::DifferenceExceedsThreshold,
                AlertKind::DaysExceedPeriod,
                AlertKind::InvalidHourlyRate,
                AlertKind::UnrecognizedTransportFlag,
            ]
        );
    }

    #[test]
    fn test_evaluate_pulls_reported_figures_from_report() {
        let record = evaluate(
            &level_table(),
            Some(&monthly_report()),
            &input("1032456789", "A1", 30),
            None,
            &CalcConfig::default(),
        )
        .unwrap();

        // 1200000 prorated + 200000 transport = 1400000 calculated.
        assert_eq!(record.total_calculated, dec("1400000.00"));
        assert_eq!(record.reported_total, dec("1405000"));
        assert_eq!(record.reported_net, dec("1300000"));
        assert_eq!(record.difference, dec("5000.00"));
        assert_eq!(record.alerts.len(), 1);
        assert_eq!(record.alerts[0].kind, AlertKind::DifferenceExceedsThreshold);
    }

    #[test]
    fn test_evaluate_unknown_id_defaults_reported_to_zero() {
        let record = evaluate(
            &level_table(),
            Some(&monthly_report()),
            &input("999", "A1", 30),
            None,
            &CalcConfig::default(),
        )
        .unwrap();

        assert_eq!(record.reported_total, Decimal::ZERO);
        assert_eq!(record.reported_net, Decimal::ZERO);
        assert_eq!(record.difference, dec("-1400000.00"));
    }

    #[test]
    fn test_evaluate_override_wins_over_report() {
        let record = evaluate(
            &level_table(),
            Some(&monthly_report()),
            &input("1032456789", "A1", 30),
            Some(ReportedFigures {
                total: dec("1400500"),
                net: dec("1200000"),
            }),
            &CalcConfig::default(),
        )
        .unwrap();

        assert_eq!(record.reported_total, dec("1400500"));
        assert_eq!(record.difference, dec("500.00"));
        assert!(record.alerts.is_empty());
    }

    #[test]
    fn test_evaluate_zero_salary_raises_rate_alert_not_error() {
        let record = evaluate(
            &level_table(),
            None,
            &input("1032456789", "A2", 30),
            None,
            &CalcConfig::default(),
        )
        .unwrap();

        assert!(
            record
                .alerts
                .iter()
                .any(|a| a.kind == AlertKind::InvalidHourlyRate)
        );
    }

    #[test]
    fn test_evaluate_unknown_level_is_an_error() {
        let result = evaluate(
            &level_table(),
            None,
            &input("1032456789", "Z9", 30),
            None,
            &CalcConfig::default(),
        );

        match result {
            Err(EngineError::LevelNotFound { level }) => assert_eq!(level, "Z9"),
            other => panic!("Expected LevelNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_rejects_invalid_config() {
        let config = CalcConfig {
            base_monthly_hours: 10,
            ..CalcConfig::default()
        };
        let result = evaluate(
            &level_table(),
            None,
            &input("1032456789", "A1", 30),
            None,
            &config,
        );
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
