//! Size-based dispatch between sequential and parallel products.

use crate::{DenseMatrix, Scalar};

/// Configuration for parallel matrix products.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum number of result rows before work is spread across threads.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 16,
        }
    }
}

/// Multiplies `a * b`, in parallel once `a` has at least
/// `config.parallel_threshold` rows.
///
/// # Errors
///
/// Same conditions as [`DenseMatrix::mm`].
pub fn mm_with_config<R>(
    a: &DenseMatrix<R>,
    b: &DenseMatrix<R>,
    config: &ParallelConfig,
) -> Result<DenseMatrix<R>, R::Error>
where
    R: Scalar + Send + Sync,
    R::Error: Send,
{
    if a.num_rows() < config.parallel_threshold {
        a.mm(b)
    } else {
        log::debug!(
            "parallel product of {}x{} by {}x{}",
            a.num_rows(),
            a.num_cols(),
            b.num_rows(),
            b.num_cols()
        );
        a.mm_parallel(b)
    }
}
