use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fastio_writer::FastWriter;
use std::io;

fn bench_writer(c: &mut Criterion) {
    let mut group = c.benchmark_group("writer");

    let values: Vec<i64> = (0..100_000).map(|i| i * 7919 - 500_000).collect();
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("print_array_100k", |b| {
        b.iter(|| {
            let mut writer = FastWriter::new(io::sink());
            writer.print_array(black_box(&values));
            writer.close();
        })
    });

    group.bench_function("println_100k", |b| {
        b.iter(|| {
            let mut writer = FastWriter::new(io::sink());
            for value in black_box(&values) {
                writer.println(value);
            }
            writer.close();
        })
    });

    group.bench_function("into_vec_100k", |b| {
        b.iter(|| {
            let mut writer = FastWriter::new(Vec::with_capacity(1 << 20));
            writer.print_array(&values);
            black_box(writer.into_inner().unwrap());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_writer);
criterion_main!(benches);
