// rayon-based row-parallel matrix-vector product

use crate::core::traits::{MatShape, MatVec};
use crate::error::LsError;
use faer::MatRef;
use num_traits::Float;
use rayon::prelude::*;

/// Configures the global rayon pool with `threads` workers (default: one per CPU).
///
/// Returns `false` when the global pool was already built; the existing pool is kept.
pub fn init_thread_pool(threads: Option<usize>) -> bool {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads.unwrap_or_else(num_cpus::get))
        .build_global()
        .is_ok()
}

/// Matrix view whose `matvec` spreads output rows over the rayon pool.
///
/// Every row is written by exactly one task and keeps the serial ascending-column
/// accumulation, so the result is bit-identical to the serial kernel.
#[derive(Clone, Copy)]
pub struct ParMatRef<'a, T>(pub MatRef<'a, T>);

impl<'a, T> ParMatRef<'a, T> {
    /// Wraps a matrix view for row-parallel products.
    pub fn new(a: MatRef<'a, T>) -> Self {
        ParMatRef(a)
    }
}

impl<T: Float + Send + Sync> MatVec<T> for ParMatRef<'_, T> {
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<(), LsError> {
        let a = self.0;
        LsError::check_len("matvec input", a.ncols(), x.len())?;
        LsError::check_len("matvec output", a.nrows(), y.len())?;
        y.par_iter_mut().enumerate().for_each(|(i, yi)| {
            let mut acc = T::zero();
            for (j, &xj) in x.iter().enumerate() {
                acc = acc + a[(i, j)] * xj;
            }
            *yi = acc;
        });
        Ok(())
    }
}

impl<T> MatShape for ParMatRef<'_, T> {
    fn nrows(&self) -> usize {
        self.0.nrows()
    }
    fn ncols(&self) -> usize {
        self.0.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;

    #[test]
    fn parallel_rows_match_serial_bitwise() {
        let a = Mat::from_fn(37, 11, |i, j| ((i * 7 + j * 3) as f64).sin());
        let x: Vec<f64> = (0..11).map(|j| (j as f64 * 0.37).cos()).collect();
        let mut serial = vec![0.0; 37];
        let mut par = vec![0.0; 37];
        a.matvec(&x, &mut serial).unwrap();
        ParMatRef::new(a.as_ref()).matvec(&x, &mut par).unwrap();
        assert_eq!(serial, par);
    }

    #[test]
    fn parallel_rejects_bad_input_length() {
        let a = Mat::from_fn(3, 3, |_, _| 1.0f64);
        let mut y = vec![0.0; 3];
        assert!(ParMatRef::new(a.as_ref()).matvec(&[1.0, 2.0], &mut y).is_err());
    }
}
