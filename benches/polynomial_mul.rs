use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use torus_core::prelude::*;

fn random_polynomial(polynomial_size: usize) -> TorusPolynomial<u64> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    TorusPolynomial::from_container((0..polynomial_size).map(|_| rng.gen()).collect())
}

fn bench_negacyclic_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("negacyclic_mul");

    for polynomial_size in [256usize, 1024, 4096] {
        let lhs = random_polynomial(polynomial_size);
        let rhs = random_polynomial(polynomial_size);
        let mut output = TorusPolynomial::<u64>::from_container(vec![0; polynomial_size]);

        group.bench_with_input(
            BenchmarkId::new("schoolbook", polynomial_size),
            &polynomial_size,
            |b, _| {
                b.iter(|| {
                    polynomial_wrapping_mul(
                        black_box(&mut output),
                        black_box(&lhs),
                        black_box(&rhs),
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("karatsuba", polynomial_size),
            &polynomial_size,
            |b, _| {
                b.iter(|| {
                    polynomial_karatsuba_wrapping_mul(
                        black_box(&mut output),
                        black_box(&lhs),
                        black_box(&rhs),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_negacyclic_mul);
criterion_main!(benches);
