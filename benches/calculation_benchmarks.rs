//! Performance benchmarks for the Pay Calculation Engine.
//!
//! This benchmark suite verifies that the calculation engine stays cheap
//! enough to run inline wherever a shift is recorded:
//! - Time parsing: well under 1μs
//! - Single shift total: < 10μs mean
//! - Batch of 1000 shifts: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use sitter_engine::calculation::PayCalculator;
use sitter_engine::models::TimeOfDay;

/// The shift samples cycled through by the batch benchmarks.
const SAMPLE_SHIFTS: &[(&str, &str)] = &[
    ("5:00 PM", "8:00 PM"),
    ("12:00 PM", "6:00 PM"),
    ("8:00 PM", "10:00 PM"),
    ("12:00 AM", "2:00 AM"),
    ("5:30 PM", "8:45 PM"),
    ("5:00 PM", "1:00 AM"),
    ("5:00 PM", "4:00 AM"),
];

fn bench_time_parsing(c: &mut Criterion) {
    c.bench_function("parse_time_of_day", |b| {
        b.iter(|| {
            let time: TimeOfDay = black_box("11:45 PM").parse().unwrap();
            black_box(time)
        })
    });
}

fn bench_single_shift(c: &mut Criterion) {
    let calculator = PayCalculator::new("8:00 PM").unwrap();

    c.bench_function("total_daily_pay_single_shift", |b| {
        b.iter(|| {
            calculator
                .calculate_total_daily_pay(black_box("5:00 PM"), black_box("1:00 AM"))
                .unwrap()
        })
    });

    c.bench_function("breakdown_single_shift", |b| {
        b.iter(|| {
            calculator
                .calculate_with_breakdown(black_box("5:00 PM"), black_box("1:00 AM"))
                .unwrap()
        })
    });
}

fn bench_shift_batches(c: &mut Criterion) {
    let calculator = PayCalculator::new("8:00 PM").unwrap();
    let mut group = c.benchmark_group("shift_batches");

    for batch_size in [100usize, 1000] {
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &batch_size| {
                b.iter(|| {
                    let mut total = 0i64;
                    for (start, end) in SAMPLE_SHIFTS.iter().cycle().take(batch_size) {
                        total += calculator.calculate_total_daily_pay(start, end).unwrap();
                    }
                    black_box(total)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_time_parsing,
    bench_single_shift,
    bench_shift_batches
);
criterion_main!(benches);
