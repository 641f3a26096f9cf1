use faer::Mat;
use lsgd::{DescentOptions, GradientDescent, LeastSquaresSolver, objective};
use rand::Rng;
use rand_distr::StandardNormal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), lsgd::LsError> {
    // RUST_LOG=lsgd=debug shows the solver's objective before and after
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (m, n) = (10, 20);
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..m * n).map(|_| rng.sample(StandardNormal)).collect();
    let a = Mat::from_fn(m, n, |i, j| data[j * m + i]);
    let b: Vec<f64> = (0..m).map(|_| rng.sample(StandardNormal)).collect();
    let x0 = vec![0.0; n];

    let f0 = objective(&a, &b, &x0)?;

    // defaults: 1000 iterations, step 1e-3
    let x = lsgd::solve(&x0, &a, &b, &DescentOptions::default())?;
    println!("f(x0) = {f0:.6}, f(x) = {:.6}", objective(&a, &b, &x)?);

    // a step far beyond 1/λmax(AᵀA) diverges; that is reported, not raised
    let mut x = x0.clone();
    let mut solver = GradientDescent::new(200, 1.0);
    let stats = solver.solve(&a, &b, &mut x)?;
    println!(
        "step 1.0: f = {} -> {} (improved: {}, diverged: {})",
        stats.initial_objective,
        stats.final_objective,
        stats.improved(),
        stats.diverged()
    );
    Ok(())
}
