//! linmat: small 1-indexed vector and matrix types.
//!
//! This crate provides `Vector` and `Matrix` value types that use mathematical
//! (1-based) indices, a dot product, and left-to-right chained multiplication
//! over any mix of matrices and vectors. Every shape or index violation is
//! returned as a [`LinalgError`]; failed calls leave their receiver unchanged.
//!
//! Loading matrices from tabular storage lives in [`io`] behind the
//! [`io::MatrixSource`] trait so the math types stay free of storage concerns.
pub mod config;
pub mod error;
pub mod io;
pub mod math;

pub use error::{Axis, LinalgError, Result};
pub use math::{dot_product, multiply, pairwise_multiply, Matrix, Operand, Scalar, Vector};
