//! Performance benchmarks for the wage calculation engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Pure calculation for one employee-month: < 100μs mean
//! - Single HTTP round trip: < 1ms mean
//! - Batch of 100 employee-months: < 100ms mean
//! - Batch of 1000 employee-months: < 500ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use wage_engine::api::{AppState, create_router};
use wage_engine::calculation::calculate_wage;
use wage_engine::config::ConfigLoader;
use wage_engine::models::{AttendanceTally, CompensationProfile};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Builds a full month of attendance as request JSON: 22 present days
/// (one with overtime), 4 weekly off, 1 casual leave, 3 unpaid leave.
fn create_attendance_json() -> Vec<serde_json::Value> {
    let mut records = Vec::new();
    for day in 1..=22 {
        records.push(serde_json::json!({
            "date": format!("2025-06-{:02}", day),
            "status": "present",
            "hours_worked": "8",
            "overtime_hours": if day == 5 { "2" } else { "0" }
        }));
    }
    for day in 23..=26 {
        records.push(serde_json::json!({
            "date": format!("2025-06-{:02}", day),
            "status": "weekly_off"
        }));
    }
    records.push(serde_json::json!({
        "date": "2025-06-27",
        "status": "casual_leave"
    }));
    for day in 28..=30 {
        records.push(serde_json::json!({
            "date": format!("2025-06-{:02}", day),
            "status": "unpaid_leave"
        }));
    }
    records
}

/// Creates a calculation request for one employee-month.
fn create_request_json(employee_id: &str) -> String {
    let request_json = serde_json::json!({
        "employee_id": employee_id,
        "period": {
            "start_date": "2025-06-01",
            "end_date": "2025-06-30"
        },
        "compensation": {
            "basic_salary": "13500",
            "hra_amount": "7500",
            "other_allowance": "1200"
        },
        "attendance": create_attendance_json(),
        "advances": [
            {"date": "2025-06-05", "amount": "500"}
        ]
    });
    serde_json::to_string(&request_json).unwrap()
}

/// Benchmark: the pure calculation pipeline, no HTTP or JSON.
///
/// Target: < 100μs mean
fn bench_pure_calculation(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let rates = config
        .effective_rates(chrono::NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
        .expect("Failed to resolve rates")
        .clone();
    let policy = config.policy().clone();

    let profile = CompensationProfile {
        basic_salary: Decimal::from(13500),
        hra_amount: Decimal::from(7500),
        other_allowance: Decimal::from(1200),
    };
    let tally = AttendanceTally {
        present_days: 22,
        weekly_off_days: 4,
        paid_leave_days: 1,
        unpaid_leave_days: 3,
        overtime_hours: Decimal::from_str("2").unwrap(),
    };

    c.bench_function("pure_calculation", |b| {
        b.iter(|| {
            let result = calculate_wage(
                black_box(&profile),
                black_box(&tally),
                &rates,
                Decimal::from(500),
                &policy,
            )
            .unwrap();
            black_box(result)
        })
    });
}

/// Benchmark: one employee-month through the HTTP API.
///
/// Target: < 1ms mean
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_json("emp_bench_001");

    c.bench_function("http_round_trip", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 employee-months.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| create_request_json(&format!("emp_batch_{:03}", i)))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: batch of 1000 employee-months.
///
/// Target: < 500ms mean
fn bench_batch_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..1000)
        .map(|i| create_request_json(&format!("emp_batch_{:04}", i)))
        .collect();

    let mut group = c.benchmark_group("large_batch_processing");
    group.throughput(Throughput::Elements(1000));
    // Reduce sample size for large batches to keep benchmark time reasonable
    group.sample_size(10);

    group.bench_function("batch_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(1000);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: varying attendance sizes to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let rates = config
        .effective_rates(chrono::NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
        .expect("Failed to resolve rates")
        .clone();
    let policy = config.policy().clone();

    let profile = CompensationProfile {
        basic_salary: Decimal::from(13500),
        hra_amount: Decimal::from(7500),
        other_allowance: Decimal::ZERO,
    };

    let mut group = c.benchmark_group("scaling");

    for paid_days in [5u32, 15, 27, 30].iter() {
        let tally = AttendanceTally {
            present_days: *paid_days,
            weekly_off_days: 0,
            paid_leave_days: 0,
            unpaid_leave_days: 30 - paid_days,
            overtime_hours: Decimal::ZERO,
        };

        group.bench_with_input(
            BenchmarkId::new("paid_days", paid_days),
            paid_days,
            |b, _| {
                b.iter(|| {
                    let result = calculate_wage(
                        black_box(&profile),
                        black_box(&tally),
                        &rates,
                        Decimal::ZERO,
                        &policy,
                    )
                    .unwrap();
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pure_calculation,
    bench_http_round_trip,
    bench_batch_100,
    bench_batch_1000,
    bench_scaling,
);
criterion_main!(benches);
