#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the transform module.
pub mod error;

/// Affine fitting from point correspondences.
pub mod fit;

/// Low level 3x3 matrix utilities.
pub mod linalg;

/// Homogeneous coordinate conversion and point transformation.
pub mod ops;

/// Elementary transformation matrix builders, composition and inversion.
pub mod transforms;

pub use crate::error::TransformError;
pub use crate::fit::learn_affine;
pub use crate::ops::{make_euclidean, make_homogeneous, transform_points};
pub use crate::transforms::{combine, identity, invert, rotating, scaling, translating};
