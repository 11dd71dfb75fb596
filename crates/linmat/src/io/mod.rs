//! Loading matrices from tabular storage.
//!
//! The math types never depend on this module; callers fetch a [`Matrix`]
//! through a [`MatrixSource`] and hand it to the core.
pub mod table;

pub use table::DelimitedTableSource;

use anyhow::Result;

use crate::math::Matrix;

/// Capability that turns a named table into a matrix.
pub trait MatrixSource {
    /// Load `table`, keeping only `columns` in the given order.
    ///
    /// An empty `columns` slice selects every column. Each result row becomes
    /// a matrix row.
    fn load_matrix(&self, table: &str, columns: &[&str]) -> Result<Matrix<f64>>;
}
