use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Field separator of a delimited table file.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Tab
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tab" | "tsv" | "\t" => Ok(Delimiter::Tab),
            "comma" | "csv" | "," => Ok(Delimiter::Comma),
            _ => Err(format!(
                "Unknown delimiter: {}. Expected one of: tab, comma",
                s
            )),
        }
    }
}

/// Where [`DelimitedTableSource`](crate::io::DelimitedTableSource) finds its tables.
///
/// Table `name` is read from `<root>/<name>.<extension>`. Without an explicit
/// `extension` the delimiter decides: `tsv` for tabs, `csv` for commas.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TableSourceConfig {
    pub root: PathBuf,
    pub delimiter: Delimiter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl TableSourceConfig {
    pub fn new<P: Into<PathBuf>>(root: P, delimiter: Delimiter) -> Self {
        Self {
            root: root.into(),
            delimiter,
            extension: None,
        }
    }

    /// File extension in effect, explicit or derived from the delimiter.
    pub fn extension(&self) -> &str {
        match (&self.extension, self.delimiter) {
            (Some(ext), _) => ext.as_str(),
            (None, Delimiter::Tab) => "tsv",
            (None, Delimiter::Comma) => "csv",
        }
    }

    /// Path of the file backing `table`.
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{}.{}", table, self.extension()))
    }
}

impl Default for TableSourceConfig {
    fn default() -> Self {
        Self::new(".", Delimiter::Tab)
    }
}

/// Load a table source configuration from a JSON file.
pub fn load_table_source_config<P: AsRef<Path>>(path: P) -> Result<TableSourceConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: TableSourceConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
