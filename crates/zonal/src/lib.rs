//! # Zonal
//!
//! Exact algebraic number fields for zonohedral and polyhedral geometry.
//!
//! Coordinates live in small real extensions of the rationals, such as
//! Q(φ) for icosahedral symmetry, Q(√2) for octahedral work and the
//! diagonal fields of regular polygons. Every operation stays exact; real
//! values appear only when a number is explicitly evaluated.
//!
//! ## Features
//!
//! - **Field Families**: golden, square root, polygon, Q(φ, √r), Q(φ, √φ)
//!   and the snub cube field
//! - **Exact Arithmetic**: arbitrary precision rationals on every coordinate
//! - **Geometry**: vectors, dot and cross products, square matrices with
//!   exact inverse and determinant
//! - **Text Formats**: default, expression, Zomic and VEF renderings with
//!   matching parsers
//!
//! ## Quick Start
//!
//! ```
//! use zonal::prelude::*;
//!
//! let field = FieldKind::Polygon(7).build(&FieldConfig::default()).unwrap();
//! let sigma = field.unit_term(2).unwrap();
//! let fifth = field.create_power(5).unwrap();
//! assert_eq!(fifth.to_string_format(NumberFormat::Zomic), "1 5 4");
//! assert!(sigma.times(&sigma.reciprocal().unwrap()).unwrap().is_one());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use zonal_fields as fields;
pub use zonal_integers as integers;
pub use zonal_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use zonal_fields::{
        AlgebraError, AlgebraicField, AlgebraicMatrix, AlgebraicNumber, AlgebraicVector,
        FieldConfig, FieldKind, NumberFormat,
    };
    pub use zonal_integers::{Integer, Rational};
}
