//! Benchmarks for in-place row patching.
//!
//! Performance budgets:
//! - decimal_field: < 5ns per channel
//! - RowView::write_all (80 dots): < 1μs
//!
//! Run with: cargo bench -p dotfx-core --bench row_patch_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dotfx_core::digits::decimal_field;
use dotfx_core::template::RowTemplate;
use dotfx_core::{DotRng, PackedRgba, RowView};
use std::hint::black_box;

fn bench_decimal_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("digits/decimal_field");
    group.throughput(Throughput::Elements(256));
    group.bench_function("all_values", |b| {
        b.iter(|| {
            for v in 0..=u8::MAX {
                black_box(decimal_field(black_box(v)));
            }
        })
    });
    group.finish();
}

fn bench_write_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("row/write_all");

    for width in [40u16, 80, 200] {
        group.throughput(Throughput::Elements(width as u64));

        let template = RowTemplate::new(width);
        let mut row = template.build();
        let mut rng = DotRng::from_seed(7);
        let colors: Vec<PackedRgba> = (0..width)
            .map(|_| PackedRgba(rng.next_u64() as u32))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(width), &colors, |b, colors| {
            b.iter(|| {
                let mut view =
                    RowView::new(&mut row, template.offset(), width, template.layout()).unwrap();
                view.write_all(colors.iter().copied());
                black_box(&row);
            })
        });
    }

    group.finish();
}

fn bench_rng(c: &mut Criterion) {
    let mut rng = DotRng::from_seed(1);
    c.bench_function("rng/next_u64", |b| b.iter(|| black_box(rng.next_u64())));
}

criterion_group!(benches, bench_decimal_field, bench_write_row, bench_rng);
criterion_main!(benches);
