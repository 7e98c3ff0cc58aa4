//! Performance benchmarks for the payroll reconciliation engine.
//!
//! This benchmark suite verifies that the calculator stays comfortably
//! interactive:
//! - Single breakdown computation: < 10μs mean
//! - Full evaluation against a monthly report: < 50μs mean
//! - Consolidated export of 1000 records: < 500ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_recon::calculation::{compute, evaluate};
use payroll_recon::config::CalcConfig;
use payroll_recon::export::ExcelExporter;
use payroll_recon::models::{PeriodInput, ReconciliationRecord, ReportedFigures, TransportSelection};
use payroll_recon::session::Consolidator;
use payroll_recon::table::{Cell, Dataset, LevelTable, MonthlyReport};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn level_table() -> LevelTable {
    let dataset = Dataset::new(
        vec![
            "nivel".to_string(),
            "salario_base".to_string(),
            "aplica_aux_transporte".to_string(),
        ],
        vec![
            vec![
                Cell::Text("A1".to_string()),
                Cell::Number(dec("1200000")),
                Cell::Text("Sí".to_string()),
            ],
            vec![
                Cell::Text("A2".to_string()),
                Cell::Number(dec("1800000")),
                Cell::Text("No".to_string()),
            ],
        ],
    );
    LevelTable::from_dataset(&dataset).expect("Failed to build level table")
}

fn monthly_report(rows: usize) -> MonthlyReport {
    let data_rows: Vec<Vec<Cell>> = (0..rows)
        .map(|i| {
            vec![
                Cell::Text(format!("10{:08}", i)),
                Cell::Number(dec("1405000")),
            ]
        })
        .collect();

    let dataset = Dataset::new(
        vec![
            "cedula".to_string(),
            "total_devengado_reportado".to_string(),
        ],
        data_rows,
    );
    MonthlyReport::from_dataset(&dataset).expect("Failed to build monthly report")
}

fn period_input(id: &str) -> PeriodInput {
    PeriodInput {
        id: id.to_string(),
        name: "Bench Person".to_string(),
        level: "A1".to_string(),
        days_worked: 30,
        ordinary_day_hours: dec("16"),
        overtime_day_hours: dec("4"),
        night_hours: dec("10"),
        holiday_hours: dec("8"),
        food_allowance: dec("50000"),
        retroactive_bonuses: Decimal::ZERO,
        other_earnings: Decimal::ZERO,
        transport: TransportSelection::Auto,
    }
}

fn consolidated_records(count: usize) -> Vec<ReconciliationRecord> {
    let levels = level_table();
    let config = CalcConfig::default();

    (0..count)
        .map(|i| {
            evaluate(
                &levels,
                None,
                &period_input(&format!("10{:08}", i)),
                Some(ReportedFigures {
                    total: dec("1700000"),
                    net: dec("1500000"),
                }),
                &config,
            )
            .expect("Failed to evaluate")
        })
        .collect()
}

fn bench_compute_breakdown(c: &mut Criterion) {
    let levels = level_table();
    let level = levels.get("A1").expect("Missing level");
    let input = period_input("1000000001");
    let config = CalcConfig::default();

    c.bench_function("compute_breakdown", |b| {
        b.iter(|| compute(black_box(level), black_box(&input), black_box(&config)))
    });
}

fn bench_evaluate_against_report(c: &mut Criterion) {
    let levels = level_table();
    let config = CalcConfig::default();

    let mut group = c.benchmark_group("evaluate_against_report");
    for report_rows in [10usize, 100, 1000] {
        let report = monthly_report(report_rows);
        let input = period_input(&format!("10{:08}", report_rows - 1));

        group.throughput(Throughput::Elements(report_rows as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(report_rows),
            &report,
            |b, report| {
                b.iter(|| {
                    evaluate(
                        black_box(&levels),
                        Some(black_box(report)),
                        black_box(&input),
                        None,
                        black_box(&config),
                    )
                    .expect("Failed to evaluate")
                })
            },
        );
    }
    group.finish();
}

fn bench_consolidate_and_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_consolidated");
    group.sample_size(10);

    for record_count in [100usize, 1000] {
        let records = consolidated_records(record_count);
        let exporter = ExcelExporter::new();

        group.throughput(Throughput::Elements(record_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(record_count),
            &records,
            |b, records| {
                b.iter(|| {
                    let mut consolidator = Consolidator::new();
                    for record in records {
                        consolidator.append(record.clone());
                    }
                    exporter
                        .export_to_bytes(black_box(consolidator.records()))
                        .expect("Failed to export")
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_breakdown,
    bench_evaluate_against_report,
    bench_consolidate_and_export
);
criterion_main!(benches);
