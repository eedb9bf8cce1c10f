//! Window and return calculation benchmarks.
//!
//! Run with: `cargo bench --package ventana-bench`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use ventana_bench::{chart_body, sessions, synthetic_series};
use ventana_lib::{Instrument, XmexCalendar, compute_returns, compute_windows, parse_chart};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn windows_benchmark(c: &mut Criterion) {
    let calendar = XmexCalendar::new();
    let references = sessions(date(2024, 1, 1), date(2024, 12, 31)).unwrap_or_default();

    let mut group = c.benchmark_group("windows");
    group.throughput(Throughput::Elements(references.len() as u64));
    group.bench_function("compute_windows_2024", |b| {
        b.iter(|| {
            for reference in &references {
                let _ = black_box(compute_windows(black_box(*reference), &calendar));
            }
        });
    });
    group.finish();
}

fn returns_benchmark(c: &mut Criterion) {
    let calendar = XmexCalendar::new();
    let days = sessions(date(2023, 1, 1), date(2024, 12, 31)).unwrap_or_default();
    let series = synthetic_series(&days);
    let reference = date(2024, 6, 12);
    let Ok(windows) = compute_windows(reference, &calendar) else {
        return;
    };

    let mut group = c.benchmark_group("returns");
    for instrument in Instrument::all() {
        group.bench_with_input(
            BenchmarkId::new("compute_returns", instrument.ticker()),
            instrument,
            |b, instrument| {
                b.iter(|| black_box(compute_returns(&series, &windows, *instrument)));
            },
        );
    }
    group.finish();
}

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_chart");
    for (name, start) in [("1-year", date(2024, 1, 1)), ("10-years", date(2015, 1, 1))] {
        let days = sessions(start, date(2024, 12, 31)).unwrap_or_default();
        let body = chart_body(&days);
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &body, |b, body| {
            b.iter(|| black_box(parse_chart(body.as_bytes())));
        });
    }
    group.finish();
}

criterion_group!(benches, windows_benchmark, returns_benchmark, parse_benchmark);
criterion_main!(benches);
