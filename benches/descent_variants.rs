//! Compares the in-place gradient-descent solver against two baselines:
//! a naive version that allocates on every iteration, and one that leans on faer's
//! matrix products.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use faer::Mat;
use lsgd::{DescentOptions, Kernel, solve};

/// Re-transposes `A` and allocates the residual, gradient and next iterate every step.
fn naive_descent(x0: &[f64], a: &Mat<f64>, b: &[f64], iterations: usize, step: f64) -> Vec<f64> {
    let (m, n) = (a.nrows(), a.ncols());
    let mut x = x0.to_vec();
    for _ in 0..iterations {
        let at: Vec<Vec<f64>> = (0..n).map(|j| (0..m).map(|i| a[(i, j)]).collect()).collect();
        let residual: Vec<f64> = (0..m)
            .map(|i| (0..n).map(|j| a[(i, j)] * x[j]).sum::<f64>() - b[i])
            .collect();
        let grad: Vec<f64> = at
            .iter()
            .map(|row| 2.0 * row.iter().zip(&residual).map(|(t, r)| t * r).sum::<f64>())
            .collect();
        x = x.iter().zip(&grad).map(|(xj, gj)| xj - step * gj).collect();
    }
    x
}

/// Library products: `Aᵀ` from faer, products through faer's operators.
fn faer_descent(x0: &[f64], a: &Mat<f64>, b: &[f64], iterations: usize, step: f64) -> Vec<f64> {
    let (m, n) = (a.nrows(), a.ncols());
    let at = a.transpose().to_owned();
    let mut x = Mat::from_fn(n, 1, |j, _| x0[j]);
    for _ in 0..iterations {
        let ax = a * &x;
        let residual = Mat::from_fn(m, 1, |i, _| ax[(i, 0)] - b[i]);
        let half_grad = &at * &residual;
        x = Mat::from_fn(n, 1, |j, _| x[(j, 0)] - 2.0 * step * half_grad[(j, 0)]);
    }
    (0..n).map(|j| x[(j, 0)]).collect()
}

fn problem(m: usize, n: usize) -> (Mat<f64>, Vec<f64>) {
    let a = Mat::from_fn(m, n, |i, j| ((i * n + j) as f64).sin());
    let b = (0..m).map(|i| (i as f64).cos()).collect();
    (a, b)
}

fn bench_variants(c: &mut Criterion) {
    let iterations = 1000;
    let step = 1e-3;
    let mut group = c.benchmark_group("descent");
    for &(m, n) in &[(10, 20), (100, 50)] {
        let (a, b) = problem(m, n);
        let x0 = vec![0.0; n];
        let label = format!("{m}x{n}");

        group.bench_with_input(BenchmarkId::new("naive", &label), &a, |ben, a| {
            ben.iter(|| naive_descent(black_box(&x0), a, black_box(&b), iterations, step))
        });

        let serial = DescentOptions::new(iterations, step);
        group.bench_with_input(BenchmarkId::new("in_place", &label), &a, |ben, a| {
            ben.iter(|| solve(black_box(&x0), a, black_box(&b), &serial).unwrap())
        });

        let par = serial.with_kernel(Kernel::Rayon);
        group.bench_with_input(BenchmarkId::new("in_place_rayon", &label), &a, |ben, a| {
            ben.iter(|| solve(black_box(&x0), a, black_box(&b), &par).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("faer_products", &label), &a, |ben, a| {
            ben.iter(|| faer_descent(black_box(&x0), a, black_box(&b), iterations, step))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
