//! Performance benchmarks for the Shift Earnings Engine.
//!
//! Covers the pure calculator on its own, the `/calculate` endpoint, and
//! `/summary` requests of growing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_earnings::api::{AppState, create_router};
use shift_earnings::calculation::{calculate, calculate_shift_earnings};
use shift_earnings::config::{ConfigLoader, TransportPolicy};
use shift_earnings::models::{Job, ShiftInput};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Builds a summary request body with `shift_count` shifts over two weeks.
fn create_summary_body(shift_count: usize) -> String {
    let dates = [
        "2026-01-11", // Sunday
        "2026-01-12",
        "2026-01-13",
        "2026-01-14",
        "2026-01-15",
        "2026-01-16", // Friday
        "2026-01-17", // Saturday
    ];
    let times = [("09:00", "17:00"), ("22:00", "06:00"), ("08:00", "19:30")];

    let shifts: Vec<serde_json::Value> = dates
        .iter()
        .cycle()
        .zip(times.iter().cycle())
        .take(shift_count)
        .map(|(date, (start, end))| {
            serde_json::json!({
                "date": date,
                "start_time": start,
                "end_time": end
            })
        })
        .collect();

    serde_json::json!({
        "period": {"start_date": "2026-01-11", "end_date": "2026-01-24"},
        "shifts": shifts
    })
    .to_string()
}

/// Benchmark: the pure calculator for typical shift shapes.
fn bench_calculator(c: &mut Criterion) {
    let job = Job::default();
    let policy = TransportPolicy::default();

    let mut group = c.benchmark_group("calculator");
    for (name, start, end, date) in [
        ("day", "09:00", "17:00", "2026-01-14"),
        ("overnight", "22:00", "06:00", "2026-01-14"),
        ("overtime_night", "18:00", "07:00", "2026-01-14"),
        ("shabbat", "10:00", "18:00", "2026-01-17"),
    ] {
        let shift = ShiftInput::parse(start, end, date).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| black_box(calculate_shift_earnings(black_box(&shift), &job, &policy)))
        });
    }
    group.finish();

    c.bench_function("calculate_from_strings", |b| {
        b.iter(|| black_box(calculate(black_box("22:00"), "06:00", "2026-01-14", &job)))
    });
}

/// Benchmark: single shift through the HTTP router.
fn bench_single_shift(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "date": "2026-01-14",
        "start_time": "22:00",
        "end_time": "06:00"
    })
    .to_string();

    c.bench_function("single_shift", |b| {
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

/// Benchmark: summary requests of growing size to understand scaling behavior.
fn bench_summary_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("summary_scaling");

    for shift_count in [1, 7, 14, 31, 100].iter() {
        let router = create_router(state.clone());
        let body = create_summary_body(*shift_count);

        group.throughput(Throughput::Elements(*shift_count as u64));
        group.bench_with_input(
            BenchmarkId::new("shifts", shift_count),
            shift_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/summary")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calculator,
    bench_single_shift,
    bench_summary_scaling,
);
criterion_main!(benches);
