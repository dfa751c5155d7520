//! Numeric primitives for trajectory processing.
//!
//! This module provides:
//! - [`interp`]: clamped linear interpolation and half-open sample grids
//! - [`geometry`]: 2D rotation, shoelace sums and step lengths

pub mod geometry;
pub mod interp;

pub use geometry::{rotate, rotate_path, shoelace_sum};
pub use interp::{half_open_grid, interp, interp_all};
