//! Geometric image transformations.
//!
//! This module applies a 3x3 transformation matrix to a raster image by
//! inverse mapping: for each destination pixel the matrix inverse gives the
//! source position, which is resampled with the selected interpolation mode.

mod perspective;

pub use perspective::warp_perspective;
