//! Performance benchmarks for the Lifecycle Engine.
//!
//! This benchmark suite tracks the hot paths of the engine:
//! - Status derivation, which runs on every attendance read
//! - Leave day counting over month- and year-sized ranges
//! - The full submit/decide cycle through the gateway
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use lifecycle_engine::config::ConfigLoader;
use lifecycle_engine::gateway::{FixedClock, LifecycleGateway};
use lifecycle_engine::lifecycle::{check_in, check_out, count_working_days, derive_status};
use lifecycle_engine::models::{Actor, LeaveDecision, LeaveType, Location, Role};

fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn loader() -> ConfigLoader {
    ConfigLoader::load("./config/hr-portal").expect("Failed to load config")
}

fn employee(id: &str) -> Actor {
    Actor {
        employee_id: id.to_string(),
        role: Role::Employee,
        department: None,
    }
}

fn hr() -> Actor {
    Actor {
        employee_id: "hr_001".to_string(),
        role: Role::Hr,
        department: None,
    }
}

/// Benchmarks status derivation over a closed attendance day.
fn bench_derive_status(c: &mut Criterion) {
    let config = loader();
    let shift = config.shift_config(None);

    let record = check_out(
        Some(
            check_in(
                None,
                "emp_001",
                datetime("2026-03-09 09:05:00"),
                Location::Office,
                None,
            )
            .unwrap(),
        ),
        "emp_001",
        datetime("2026-03-09 17:30:00"),
        Some(30),
        None,
        shift,
    )
    .unwrap();
    let now = datetime("2026-03-10 08:00:00");

    c.bench_function("derive_status_closed_day", |b| {
        b.iter(|| {
            black_box(derive_status(
                black_box(Some(&record)),
                date("2026-03-09"),
                shift,
                now,
            ))
        })
    });
}

/// Benchmarks leave day counting over increasingly long ranges.
fn bench_count_working_days(c: &mut Criterion) {
    let config = loader();
    let calendar = config.calendar();

    let mut group = c.benchmark_group("count_working_days");
    for (label, start, end, days) in [
        ("one_week", "2026-03-09", "2026-03-15", 7u64),
        ("one_month", "2026-03-01", "2026-03-31", 31),
        ("one_year", "2026-01-01", "2026-12-31", 365),
    ] {
        group.throughput(Throughput::Elements(days));
        group.bench_with_input(BenchmarkId::from_parameter(label), &(start, end), |b, (start, end)| {
            b.iter(|| black_box(count_working_days(date(start), date(end), calendar)))
        });
    }
    group.finish();
}

/// Benchmarks the full submit/approve cycle through the gateway.
fn bench_submit_and_approve(c: &mut Criterion) {
    let config = Arc::new(loader());

    c.bench_function("submit_and_approve_cycle", |b| {
        b.iter_batched(
            || {
                LifecycleGateway::with_clock(
                    config.clone(),
                    Arc::new(FixedClock::new(datetime("2026-03-02 10:00:00"))),
                )
            },
            |gateway| {
                let request = gateway
                    .submit_leave(
                        &employee("emp_001"),
                        LeaveType::Annual,
                        date("2026-03-09"),
                        date("2026-03-11"),
                        "benchmark leave".to_string(),
                        None,
                    )
                    .unwrap();
                gateway
                    .decide_leave(
                        &hr(),
                        request.id,
                        LeaveDecision::Approved,
                        request.version,
                        None,
                        None,
                    )
                    .unwrap()
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

/// Benchmarks the check-in/check-out day cycle through the gateway.
fn bench_attendance_day_cycle(c: &mut Criterion) {
    let config = Arc::new(loader());

    c.bench_function("check_in_out_cycle", |b| {
        b.iter_batched(
            || {
                let clock = Arc::new(FixedClock::new(datetime("2026-03-09 09:05:00")));
                (
                    LifecycleGateway::with_clock(config.clone(), clock.clone()),
                    clock,
                )
            },
            |(gateway, clock)| {
                let actor = employee("emp_001");
                gateway
                    .check_in(&actor, Location::Office, None, None)
                    .unwrap();
                clock.set(datetime("2026-03-09 17:30:00"));
                black_box(gateway.check_out(&actor, Some(30), None, None).unwrap())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_derive_status,
    bench_count_working_days,
    bench_submit_and_approve,
    bench_attendance_day_cycle
);
criterion_main!(benches);
