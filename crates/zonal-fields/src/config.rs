//! Construction-time configuration.

use zonal_linalg::ParallelConfig;

/// Bounds and tuning applied when fields are built from a [`FieldKind`](crate::FieldKind).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    /// Largest polygon accepted by [`FieldKind::build`](crate::FieldKind::build).
    ///
    /// The polygon family itself has no upper bound; this is the limit the
    /// surrounding application enforces on user-chosen fields.
    pub max_polygon_sides: u32,
    /// Dispatch threshold for [`AlgebraicMatrix::times_parallel`](crate::AlgebraicMatrix::times_parallel).
    pub parallel: ParallelConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_polygon_sides: 30,
            parallel: ParallelConfig::default(),
        }
    }
}
