//! Dense linear algebra helpers.

mod matrix;

pub use matrix::{invert_symmetric, mat_vec, xtx, xty};
