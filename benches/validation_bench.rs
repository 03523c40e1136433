// benches/validation_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rmnv::MOBILE_VALIDATOR;

// (phone, country code); an empty code makes the validator detect the country
type TestEntity = (&'static str, &'static str);

/// A mix of valid, foreign and malformed numbers, so that both the fast
/// rejection and the full scan over the registry are measured.
fn setup_validation_data() -> Vec<TestEntity> {
    vec![
        ("+996700123456", "kg"),
        ("+79991234567", "kz"),
        ("+14155552671", ""),
        ("+447911123456", ""),
        ("+5511987654321", ""),
        ("+123456789", ""),
        ("+996 (700) 123-456", "kg"),
        ("invalid", "us"),
    ]
}

fn validation_benchmark(c: &mut Criterion) {
    let numbers = setup_validation_data();

    let mut group = c.benchmark_group("Validation");

    group.bench_function("validate()", |b| {
        b.iter(|| {
            for (phone, country_code) in &numbers {
                let _ = MOBILE_VALIDATOR.validate(black_box(phone), black_box(country_code));
            }
        })
    });

    group.bench_function("detect_country()", |b| {
        b.iter(|| {
            for (phone, _) in &numbers {
                let _ = MOBILE_VALIDATOR.detect_country(black_box(phone));
            }
        })
    });

    group.bench_function("check()", |b| {
        b.iter(|| {
            for (phone, country_code) in &numbers {
                let _ = MOBILE_VALIDATOR.check(black_box(phone), black_box(country_code));
            }
        })
    });

    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    let phones: Vec<String> = (0..1000)
        .map(|i| match i % 3 {
            0 => format!("+996700{:06}", i),
            1 => format!("+7999{:07}", i),
            _ => format!("+1415{:07}", i),
        })
        .collect();

    let mut group = c.benchmark_group("Batch");
    for parallelism in [1, 4, 10] {
        group.bench_function(format!("validate_batch(1000, {})", parallelism), |b| {
            b.iter(|| {
                MOBILE_VALIDATOR.validate_batch(black_box(phones.as_slice()), parallelism, None)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, validation_benchmark, batch_benchmark);
criterion_main!(benches);
