// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use factorium_factorial::limits::largest_representable_input;
use factorium_factorial::monitor::no_op::NoOperationMonitor;
use factorium_factorial::monitor::recording::RecordingMonitor;
use factorium_factorial::variant::Variant;
use std::hint::black_box;

fn bench_variants_u64(c: &mut Criterion) {
    let n = largest_representable_input::<u64>();
    let mut group = c.benchmark_group("factorial_u64");
    group.throughput(Throughput::Elements(n));

    for variant in Variant::ALL {
        group.bench_with_input(
            BenchmarkId::new(variant.to_string(), n),
            &variant,
            |b, variant| {
                b.iter(|| {
                    // Traced variants record into a fresh monitor per iteration.
                    let mut recorder = RecordingMonitor::new();
                    let result = variant.evaluate(black_box(n), &mut recorder);
                    black_box((result, recorder))
                })
            },
        );
    }
    group.finish();
}

fn bench_wrapping_past_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial_wrapping_u64");

    for n in [21_u64, 64, 1_000] {
        for code in ["r", "i"] {
            let variant: Variant = code
                .parse()
                .unwrap_or_else(|e| panic!("Invalid benchmark variant {}: {}", code, e));
            group.bench_with_input(BenchmarkId::new(code, n), &n, |b, &n| {
                b.iter(|| variant.evaluate(black_box(n), &mut NoOperationMonitor::new()))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_variants_u64, bench_wrapping_past_range);
criterion_main!(benches);
