use thiserror::Error;

// Unified error type for lsgd

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LsError {
    #[error("dimension mismatch in {op}: expected length {expected}, found {found}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },
}

impl LsError {
    /// Returns `Ok(())` when `found == expected`, a `DimensionMismatch` otherwise.
    pub fn check_len(op: &'static str, expected: usize, found: usize) -> Result<(), LsError> {
        if expected == found {
            Ok(())
        } else {
            Err(LsError::DimensionMismatch { op, expected, found })
        }
    }
}
