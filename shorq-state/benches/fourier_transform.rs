use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shorq_state::{Amplitude, FourierConfig, FourierTransform, QuantumRegister};

// Register collapsed onto every `period`-th basis state, as after the
// register-two measurement in Shor's algorithm
fn periodic_register(num_qubits: usize, period: usize) -> QuantumRegister {
    let dimension = 1 << num_qubits;
    let state: Vec<Amplitude> = (0..dimension)
        .map(|a| if a % period == 1 { Amplitude::ONE } else { Amplitude::ZERO })
        .collect();

    let mut reg = QuantumRegister::new(num_qubits).unwrap();
    reg.set_state(&state).unwrap();
    reg.normalize().unwrap();
    reg
}

fn bench_periodic_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("fourier_periodic");
    let transform = FourierTransform::default();

    for num_qubits in [8, 9, 10, 11].iter() {
        let q = 1usize << num_qubits;
        group.throughput(Throughput::Elements((q * q) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_qubits", num_qubits)),
            num_qubits,
            |b, &num_qubits| {
                let reg = periodic_register(num_qubits, 4);
                b.iter(|| {
                    let mut reg = reg.clone();
                    transform.apply(black_box(&mut reg), q).unwrap();
                    reg
                });
            },
        );
    }

    group.finish();
}

fn bench_skip_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fourier_skip_threshold");
    let q = 1usize << 9;
    let reg = periodic_register(9, 6);

    for (label, threshold) in [("skip", 1e-14), ("dense", -1.0)] {
        let transform = FourierTransform::new(FourierConfig::new().with_skip_threshold(threshold));
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut reg = reg.clone();
                transform.apply(black_box(&mut reg), q).unwrap();
                reg
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_periodic_transform, bench_skip_threshold);
criterion_main!(benches);
