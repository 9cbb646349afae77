//! Numeric series extraction.
//! Scatter data arrives as a flat list `[x1, y1, x2, y2, ...]`; box data as
//! named DataFrame columns.

use polars::prelude::*;
use tracing::warn;

use super::loader::is_numeric;
use crate::error::{PlotError, PlotResult};

/// Flat list of series read pairwise as x/y.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyData {
    series: Vec<Vec<f64>>,
}

impl XyData {
    pub fn new(series: Vec<Vec<f64>>) -> Self {
        Self { series }
    }

    /// Every column of `df`, in order, read pairwise as x/y.
    pub fn from_frame(df: &DataFrame) -> PlotResult<Self> {
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        Self::from_columns(df, &names)
    }

    /// The named columns of `df`, in the given order, read pairwise as x/y.
    ///
    /// A row is kept in a pair only when both its x and y are present, so
    /// points stay aligned when a column has gaps.
    pub fn from_columns(df: &DataFrame, columns: &[String]) -> PlotResult<Self> {
        let raw = columns
            .iter()
            .map(|name| row_values(df, name))
            .collect::<PlotResult<Vec<_>>>()?;

        let mut series = Vec::with_capacity(raw.len());
        let mut chunks = raw.chunks_exact(2);
        for (pair, names) in chunks.by_ref().zip(columns.chunks_exact(2)) {
            let (x, y): (Vec<f64>, Vec<f64>) = pair[0]
                .iter()
                .zip(&pair[1])
                .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
                .unzip();
            if x.is_empty() {
                warn!(
                    x = names[0].as_str(),
                    y = names[1].as_str(),
                    "no rows with both x and y present"
                );
            }
            series.push(x);
            series.push(y);
        }
        // odd trailing column is kept so pairs() reports it
        for rest in chunks.remainder() {
            series.push(rest.iter().flatten().copied().collect());
        }
        Ok(Self { series })
    }

    /// Number of series (x and y lists counted separately).
    pub fn series_len(&self) -> usize {
        self.series.len()
    }

    /// Number of x/y pairs.
    pub fn trace_count(&self) -> usize {
        self.series.len() / 2
    }

    pub fn series(&self) -> &[Vec<f64>] {
        &self.series
    }

    /// Pair up the series, rejecting an odd count and unequal x/y lengths.
    pub fn pairs(&self) -> PlotResult<Vec<(&[f64], &[f64])>> {
        if self.series.len() % 2 != 0 {
            return Err(PlotError::OddSeriesCount(self.series.len()));
        }

        self.series
            .chunks_exact(2)
            .enumerate()
            .map(|(trace, pair)| {
                let (x, y) = (&pair[0], &pair[1]);
                if x.len() != y.len() {
                    return Err(PlotError::LengthMismatch {
                        trace,
                        x_len: x.len(),
                        y_len: y.len(),
                    });
                }
                Ok((x.as_slice(), y.as_slice()))
            })
            .collect()
    }
}

impl From<Vec<Vec<f64>>> for XyData {
    fn from(series: Vec<Vec<f64>>) -> Self {
        Self::new(series)
    }
}

/// Values of a numeric column as `f64`, with nulls and NaN dropped.
pub fn column_values(df: &DataFrame, name: &str) -> PlotResult<Vec<f64>> {
    let values: Vec<f64> = row_values(df, name)?.into_iter().flatten().collect();
    if values.is_empty() {
        warn!(column = name, "column has no numeric values");
    }
    Ok(values)
}

/// One entry per row; `None` where the cell is null or NaN.
fn row_values(df: &DataFrame, name: &str) -> PlotResult<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .map_err(|_| PlotError::UnknownColumn(name.to_string()))?;

    if !is_numeric(column.dtype()) {
        return Err(PlotError::NonNumericColumn {
            name: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }

    let as_f64 = column.cast(&DataType::Float64)?;
    let values = as_f64
        .f64()?
        .into_iter()
        .map(|v| v.filter(|v| !v.is_nan()))
        .collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("a".into(), [1.0, 2.0, f64::NAN]),
            Column::new("b".into(), [Some(4i64), None, Some(6)]),
            Column::new("label".into(), ["x", "y", "z"]),
        ])
        .unwrap()
    }

    #[test]
    fn pairs_flat_series() {
        let data = XyData::new(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![0.0], vec![9.0]]);
        assert_eq!(data.series_len(), 4);
        assert_eq!(data.trace_count(), 2);

        let pairs = data.pairs().unwrap();
        assert_eq!(pairs[0], (&[1.0, 2.0][..], &[3.0, 4.0][..]));
        assert_eq!(pairs[1], (&[0.0][..], &[9.0][..]));
    }

    #[test]
    fn odd_series_count_is_rejected() {
        let data = XyData::new(vec![vec![1.0], vec![2.0], vec![3.0]]);
        assert_eq!(data.trace_count(), 1);
        assert!(matches!(data.pairs(), Err(PlotError::OddSeriesCount(3))));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let data = XyData::new(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            data.pairs(),
            Err(PlotError::LengthMismatch {
                trace: 0,
                x_len: 2,
                y_len: 1
            })
        ));
    }

    #[test]
    fn column_values_drop_nulls_and_nan() {
        let df = frame();
        assert_eq!(column_values(&df, "a").unwrap(), vec![1.0, 2.0]);
        assert_eq!(column_values(&df, "b").unwrap(), vec![4.0, 6.0]);
    }

    #[test]
    fn column_errors() {
        let df = frame();
        assert!(matches!(
            column_values(&df, "missing"),
            Err(PlotError::UnknownColumn(_))
        ));
        assert!(matches!(
            column_values(&df, "label"),
            Err(PlotError::NonNumericColumn { .. })
        ));
    }

    #[test]
    fn from_columns_keeps_requested_order() {
        let df = frame();
        let data = XyData::from_columns(&df, &["b".to_string(), "a".to_string()]).unwrap();
        // row 1 has no b, row 2 has a NaN a
        assert_eq!(data.series()[0], vec![4.0]);
        assert_eq!(data.series()[1], vec![1.0]);
    }

    #[test]
    fn gaps_in_x_or_y_drop_the_whole_row() {
        let df = DataFrame::new(vec![
            Column::new("x".into(), [Some(1.0), None, Some(3.0), Some(4.0)]),
            Column::new("y".into(), [Some(10.0), Some(20.0), None, Some(40.0)]),
        ])
        .unwrap();
        let data = XyData::from_columns(&df, &["x".to_string(), "y".to_string()]).unwrap();
        let pairs = data.pairs().unwrap();
        assert_eq!(pairs[0], (&[1.0, 4.0][..], &[10.0, 40.0][..]));
    }

    #[test]
    fn single_missing_cell_still_pairs() {
        let df = DataFrame::new(vec![
            Column::new("x".into(), [1.0, 2.0, 3.0]),
            Column::new("y".into(), [Some(10.0), None, Some(30.0)]),
        ])
        .unwrap();
        let data = XyData::from_frame(&df).unwrap();
        assert_eq!(data.pairs().unwrap()[0], (&[1.0, 3.0][..], &[10.0, 30.0][..]));
    }

    #[test]
    fn odd_column_list_is_reported_by_pairs() {
        let df = frame();
        let names = ["a", "b", "a"].map(String::from);
        let data = XyData::from_columns(&df, &names).unwrap();
        assert_eq!(data.series_len(), 3);
        assert!(matches!(data.pairs(), Err(PlotError::OddSeriesCount(3))));
    }
}
