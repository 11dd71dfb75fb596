//! Delimited text tables (TSV/CSV with a header row).
use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::config::TableSourceConfig;
use crate::io::MatrixSource;
use crate::math::Matrix;

/// [`MatrixSource`] backed by a directory of delimited files, one per table.
#[derive(Debug, Clone)]
pub struct DelimitedTableSource {
    config: TableSourceConfig,
}

impl DelimitedTableSource {
    pub fn new(config: TableSourceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TableSourceConfig {
        &self.config
    }
}

impl MatrixSource for DelimitedTableSource {
    fn load_matrix(&self, table: &str, columns: &[&str]) -> Result<Matrix<f64>> {
        let path = self.config.table_path(table);
        log::debug!("Loading table '{}' from {}", table, path.display());

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter.as_byte())
            .has_headers(true)
            .from_path(&path)
            .with_context(|| format!("Failed to open table '{}': {}", table, path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header row of table '{}'", table))?
            .clone();

        let indices = resolve_columns(&headers, columns)?;
        if indices.is_empty() {
            return Err(anyhow!("Table '{}' has no columns", table));
        }

        let mut data = Vec::new();
        let mut rows = 0usize;
        for (row_idx, result) in reader.records().enumerate() {
            let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
            for &idx in &indices {
                let raw = record.get(idx).ok_or_else(|| {
                    anyhow!(
                        "Missing value for column '{}' at row {}",
                        &headers[idx],
                        row_idx + 1
                    )
                })?;
                let value = raw.trim().parse::<f64>().with_context(|| {
                    format!(
                        "Invalid numeric value '{}' in column '{}' at row {}",
                        raw,
                        &headers[idx],
                        row_idx + 1
                    )
                })?;
                data.push(value);
            }
            rows += 1;
        }

        if rows == 0 {
            log::warn!("Table '{}' has a header but no data rows", table);
            return Err(anyhow!("Table '{}' contains no rows", table));
        }

        log::info!("Loaded {}x{} matrix from table '{}'", rows, indices.len(), table);
        Ok(Matrix::from_shape_vec((rows, indices.len()), data)?)
    }
}

fn resolve_columns(headers: &StringRecord, columns: &[&str]) -> Result<Vec<usize>> {
    if columns.is_empty() {
        return Ok((0..headers.len()).collect());
    }
    columns
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h.trim() == *name)
                .ok_or_else(|| anyhow!("Unknown column '{}'", name))
        })
        .collect()
}
