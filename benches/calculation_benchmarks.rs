//! Performance benchmarks for the Payroll Engine.
//!
//! This benchmark suite covers:
//! - Working-day enumeration for a single month
//! - Salary slip generation without HTTP overhead
//! - A salary slip request through the router
//! - A batch of 100 salary slip requests
//! - Month summaries for several months of one year
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::generate_salary_slip;
use payroll_engine::calendar::{month_summary, working_days_in_month};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{AttendanceCounts, EmployeeSalaryProfile, PayMonth};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a salary slip request body for the given employee index.
fn create_slip_body(i: usize) -> String {
    let request_json = serde_json::json!({
        "employee": {
            "employee_id": format!("EMP-{:04}", i),
            "name": "Bench Employee",
            "department": "Operations",
            "monthly_salary": format!("{}", 30000 + i * 250)
        },
        "attendance": {
            "present_days": "18",
            "absent_days": format!("{}", i % 3),
            "half_days": "1",
            "paid_leave_days": "1",
            "total_working_days": "22",
            "overtime_hours": format!("{}", i % 5)
        },
        "year": 2025,
        "month": 2
    });
    serde_json::to_string(&request_json).unwrap()
}

/// Benchmark: Working days of one month.
fn bench_working_days(c: &mut Criterion) {
    let period = PayMonth::new(2025, 4).unwrap();
    c.bench_function("working_days_in_month", |b| {
        b.iter(|| black_box(working_days_in_month(black_box(period))))
    });
}

/// Benchmark: Salary slip generation, calculation only.
fn bench_generate_salary_slip(c: &mut Criterion) {
    let state = create_test_state();
    let employee = EmployeeSalaryProfile {
        employee_id: "EMP-0001".to_string(),
        name: "Bench Employee".to_string(),
        department: "Operations".to_string(),
        monthly_salary: Decimal::from(50000),
    };
    let attendance = AttendanceCounts {
        present_days: Decimal::from(18),
        absent_days: Decimal::from(2),
        half_days: Decimal::from(1),
        paid_leave_days: Decimal::from(1),
        total_working_days: Decimal::from(22),
        overtime_hours: Decimal::from(6),
        ..Default::default()
    };
    let period = PayMonth::new(2025, 2).unwrap();

    c.bench_function("generate_salary_slip", |b| {
        b.iter(|| {
            black_box(
                generate_salary_slip(&employee, &attendance, period, state.rules()).unwrap(),
            )
        })
    });
}

/// Benchmark: One salary slip through the HTTP router.
fn bench_salary_slip_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_slip_body(1);

    c.bench_function("salary_slip_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary-slip")
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

/// Benchmark: Batch of 100 salary slips for different employees.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let requests: Vec<String> = (0..100).map(create_slip_body).collect();

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
                            .uri("/salary-slip")
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

/// Benchmark: Month summaries for a sample of 2025 months.
fn bench_month_summary(c: &mut Criterion) {
    let state = create_test_state();
    let mut group = c.benchmark_group("month_summary");

    for month in [1u32, 4, 8, 12].iter() {
        let period = PayMonth::new(2025, *month).unwrap();
        group.bench_with_input(BenchmarkId::new("month", month), &period, |b, period| {
            let registry = state.holidays();
            b.iter(|| black_box(month_summary(*period, &registry)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_working_days,
    bench_generate_salary_slip,
    bench_salary_slip_request,
    bench_batch_100,
    bench_month_summary,
);
criterion_main!(benches);
