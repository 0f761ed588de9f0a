use criterion::{criterion_group, criterion_main, Criterion};
use snowflake_id::{decode, decode_str, GeneratorConfig, IdGenerator};
use std::hint::black_box;

pub fn sequence_bits_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequence Bits Comparison");

    // Fewer sequence bits means more time spent spinning for the next millisecond
    for &sequence_bits in &[6, 8, 10, 12, 14] {
        let config = GeneratorConfig::builder()
            .sequence_bits(sequence_bits)
            .build()
            .unwrap();
        let max_sequence = 2u32.pow(sequence_bits as u32);

        group.bench_function(
            format!("seq_bits_{}_ids_per_ms_{}", sequence_bits, max_sequence),
            |b| {
                let mut generator = IdGenerator::with_config(1, 1, config).unwrap();
                b.iter(|| {
                    black_box(generator.next_id().unwrap());
                });
            },
        );
    }

    group.finish();
}

pub fn decode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode");
    let config = GeneratorConfig::default();
    let mut generator = IdGenerator::with_config(1, 1, config).unwrap();
    let id = generator.next_id().unwrap();
    let text = id.to_string();

    group.bench_function("decode", |b| {
        b.iter(|| {
            black_box(decode(black_box(id), &config));
        });
    });

    group.bench_function("decode_str", |b| {
        b.iter(|| {
            black_box(decode_str(black_box(&text), &config).unwrap());
        });
    });

    group.finish();
}

pub fn contended_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Contended");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            b.iter(|| {
                let generator =
                    std::sync::Arc::new(std::sync::Mutex::new(IdGenerator::new(1, 1).unwrap()));
                let mut handles = Vec::with_capacity(thread_count);

                for _ in 0..thread_count {
                    let gen = std::sync::Arc::clone(&generator);
                    handles.push(std::thread::spawn(move || {
                        black_box(gen.lock().unwrap().next_id().unwrap());
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    sequence_bits_comparison,
    decode_benchmarks,
    contended_benchmarks
);
criterion_main!(benches);
