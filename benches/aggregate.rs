use std::fmt::Write;
use std::io;
use std::num::NonZeroUsize;

use criterion::{criterion_group, criterion_main, Criterion};

use colsum::{Accumulator, LineParser, Source};

fn sample_input(lines: usize) -> String {
    let mut input = String::new();
    for i in 0..lines {
        writeln!(input, "region-{},{}.5,product-{}", i % 40, i % 97, i % 13).unwrap();
    }
    input
}

fn aggregate_benchmark(c: &mut Criterion) {
    let input = sample_input(100_000);
    let parser = LineParser::new(NonZeroUsize::new(2).unwrap(), ",");
    c.bench_function("aggregate", |b| {
        b.iter(|| {
            let mut accumulator = Accumulator::new();
            accumulator
                .process(Source::new("bench", io::Cursor::new(input.clone())), &parser)
                .unwrap();
            let mut output = Vec::new();
            accumulator
                .into_summary()
                .write(&mut output, parser.separator())
                .unwrap();
        })
    });
}

criterion_group!(benches, aggregate_benchmark);
criterion_main!(benches);
