use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use wavepack::{AlgorithmKind, Transform, WaveletFamily};

fn signal(len: usize) -> Vec<f64> {
    (0..len).map(|i| ((i * 31) % 17) as f64 - 8.0).collect()
}

/// Forward plus reverse of the wavelet algorithms across families.
fn bench_wavelets(c: &mut Criterion) {
    let mut group = c.benchmark_group("wavelet_roundtrip");
    for kind in [AlgorithmKind::Fwt, AlgorithmKind::Wpt] {
        for family in [WaveletFamily::Haar02, WaveletFamily::Daub04, WaveletFamily::Daub08] {
            let t = Transform::builder()
                .algorithm(kind)
                .wavelet(family.wavelet())
                .build()
                .unwrap();
            for len in [256usize, 4096] {
                let x = signal(len);
                group.bench_with_input(
                    BenchmarkId::new(format!("{}/{}", kind, family), len),
                    &x,
                    |b, x| {
                        b.iter(|| {
                            let hilb = t.forward(black_box(x)).unwrap();
                            black_box(t.reverse(&hilb).unwrap())
                        })
                    },
                );
            }
        }
    }
    group.finish();
}

/// The quadratic Fourier baseline.
fn bench_dft(c: &mut Criterion) {
    let t = Transform::builder()
        .algorithm(AlgorithmKind::Dft)
        .build()
        .unwrap();
    let mut group = c.benchmark_group("dft_forward");
    for len in [64usize, 256, 1024] {
        let x = signal(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &x, |b, x| {
            b.iter(|| black_box(t.forward(black_box(x)).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wavelets, bench_dft);
criterion_main!(benches);
