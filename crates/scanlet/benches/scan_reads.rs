//! Benchmark – `scanlet::Scanner` typed and delimited reads
#![allow(missing_docs)]

use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use scanlet::{Scanner, class};

/// Deterministic `key=value;` records, `records` of them, cycling through
/// integer, float and text values.
fn make_records(records: usize) -> String {
    let mut s = String::with_capacity(records * 16);
    for i in 0..records {
        match i % 3 {
            0 => s.push_str(&format!("k{i}={};", i * 7)),
            1 => s.push_str(&format!("k{i}=-{}.{};", i % 97, i % 13)),
            _ => s.push_str(&format!("k{i}=text{i};")),
        }
    }
    s
}

/// Walks every record and returns a checksum so the work cannot be elided.
fn scan_records(payload: &str) -> u64 {
    let mut s = Scanner::from(payload);
    let mut sum = 0u64;
    while !s.is_overflow() {
        sum += s.read_char_array(b'=') as u64;
        if s.current_is(class::is_numeric) {
            let value = s.read_f32();
            sum = sum.wrapping_add(value.to_bits().into());
            s.jump_after(b';');
        } else {
            sum += s.read_char_array(b';') as u64;
        }
    }
    sum
}

fn sum_integers(payload: &str) -> i64 {
    let mut s = Scanner::from(payload);
    let mut sum = 0i64;
    while s.jump_to(class::is_numeric) {
        sum += i64::from(s.read_i32());
        s.skip_while(class::is_not_digit);
    }
    sum
}

fn bench_scan_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_reads");

    for &records in &[100usize, 1_000, 10_000] {
        let payload = make_records(records);
        group.bench_with_input(BenchmarkId::new("records", records), &payload, |b, p| {
            b.iter(|| black_box(scan_records(black_box(p))));
        });
        group.bench_with_input(BenchmarkId::new("integers", records), &payload, |b, p| {
            b.iter(|| black_box(sum_integers(black_box(p))));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = bench_scan_reads
}
criterion_main!(benches);
