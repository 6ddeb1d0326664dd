//! RILL — one-dimensional interpolation primitives.
//!
//! Interpolants are built once from sample data, validated up front,
//! and evaluated through the [`interpolation::Interpolator`] trait.

pub mod interpolation;
