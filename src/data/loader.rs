//! CSV Data Loader Module
//! Loads plot data from CSV files using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::PlotResult;

/// Loads a CSV file into a DataFrame and answers column queries on it.
pub struct DataLoader {
    df: DataFrame,
    file_path: PathBuf,
}

impl DataLoader {
    /// Load a CSV file using Polars.
    pub fn load_csv(file_path: impl AsRef<Path>) -> PlotResult<Self> {
        let file_path = file_path.as_ref().to_path_buf();

        // Lazy scan, then collect
        let df = LazyCsvReader::new(&file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        debug!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded csv"
        );
        Ok(Self { df, file_path })
    }

    /// Get list of column names.
    pub fn columns(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get list of numeric column names.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.df
            .get_columns()
            .iter()
            .filter(|col| is_numeric(col.dtype()))
            .map(|col| col.name().to_string())
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

/// Whether a column dtype can be plotted as numbers.
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("ezplot_{}_{}.csv", name, std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_and_lists_columns() {
        let path = write_csv("loader", "a,b,label\n1,2.5,x\n3,4.5,y\n");
        let loader = DataLoader::load_csv(&path).unwrap();

        assert_eq!(loader.row_count(), 2);
        assert_eq!(loader.columns(), vec!["a", "b", "label"]);
        assert_eq!(loader.numeric_columns(), vec!["a", "b"]);
        assert_eq!(loader.file_path(), path.as_path());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(DataLoader::load_csv("/definitely/not/here.csv").is_err());
    }
}
