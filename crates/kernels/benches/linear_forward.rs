// Copyright 2025 RTB House S.A.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use neurops_buffer::HeapBuffer;
use neurops_kernels::{gemv, linear_batch_forward, linear_forward, CpuBackend, Transpose};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_buffer(rng: &mut StdRng, len: usize) -> HeapBuffer {
	let data: Vec<f32> = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();
	HeapBuffer::from_floats(&data)
}

fn bench_gemv(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(0);
	let mut group = c.benchmark_group("gemv");

	for &(m, n) in &[(64usize, 64usize), (256, 256), (1024, 1024)] {
		let a = random_buffer(&mut rng, n * m);
		let x = random_buffer(&mut rng, m);
		let mut y = HeapBuffer::zeroed(n);

		// Two operations per matrix element: multiply and accumulate.
		group.throughput(Throughput::Elements((2 * m * n) as u64));
		group.bench_with_input(BenchmarkId::from_parameter(format!("{n}x{m}")), &m, |bench, _| {
			bench.iter(|| gemv(&CpuBackend, &a, &x, &mut y, m, n));
		});
	}
}

fn bench_linear_forward(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(0);
	let mut group = c.benchmark_group("linear_forward");

	for &(input_size, output_size) in &[(256usize, 128usize), (1024, 256)] {
		let weights = random_buffer(&mut rng, output_size * input_size);
		let biases = random_buffer(&mut rng, output_size);
		let input = random_buffer(&mut rng, input_size);
		let mut output = HeapBuffer::zeroed(output_size);

		group.throughput(Throughput::Elements((2 * input_size * output_size) as u64));
		for (label, transpose) in [("no_transpose", Transpose::No), ("transpose", Transpose::Yes)]
		{
			group.bench_with_input(
				BenchmarkId::new(label, format!("{output_size}x{input_size}")),
				&input_size,
				|bench, _| {
					bench.iter(|| {
						linear_forward(
							&CpuBackend,
							transpose,
							&weights,
							&biases,
							&input,
							&mut output,
							input_size,
							output_size,
						)
					});
				},
			);
		}
	}
}

fn bench_linear_batch_forward(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(0);
	let mut group = c.benchmark_group("linear_batch_forward");

	let (input_row_size, output_row_size) = (256usize, 128usize);
	for &batch_size in &[1usize, 16, 64] {
		let weights = random_buffer(&mut rng, output_row_size * input_row_size);
		let biases = random_buffer(&mut rng, output_row_size);
		let input = random_buffer(&mut rng, input_row_size * batch_size);
		let mut output = HeapBuffer::zeroed(output_row_size * batch_size);

		group.throughput(Throughput::Elements(
			(2 * input_row_size * output_row_size * batch_size) as u64,
		));
		group.bench_with_input(BenchmarkId::from_parameter(batch_size), &batch_size, |bench, _| {
			bench.iter(|| {
				linear_batch_forward(
					&CpuBackend,
					Transpose::No,
					&weights,
					&biases,
					&input,
					&mut output,
					input_row_size,
					output_row_size,
					batch_size,
				)
			});
		});
	}
}

criterion_group!(kernels, bench_gemv, bench_linear_forward, bench_linear_batch_forward);
criterion_main!(kernels);
