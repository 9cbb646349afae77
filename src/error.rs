//! Error types shared by the builders, the data layer and the renderer.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected x/y pairs, got an odd number of series ({0})")]
    OddSeriesCount(usize),
    #[error("Trace {trace}: x has {x_len} values but y has {y_len}")]
    LengthMismatch {
        trace: usize,
        x_len: usize,
        y_len: usize,
    },
    #[error("{traces} traces but only {names} names")]
    MissingNames { traces: usize, names: usize },
    #[error("Subplot grid needs at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("{flags} secondary-axis flags for a grid of {cells} cells")]
    TooManySecondaryFlags { flags: usize, cells: usize },
    #[error("{placements} placements for {traces} traces")]
    PlacementCount { placements: usize, traces: usize },
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    CellOutOfGrid {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Cell ({row}, {col}) has no secondary y axis")]
    NoSecondaryAxis { row: usize, col: usize },
    #[error("Column not found: {0}")]
    UnknownColumn(String),
    #[error("Column {name} is not numeric ({dtype})")]
    NonNumericColumn { name: String, dtype: String },
    #[error("No variables to plot")]
    NoVariables,
    #[error("Unknown color: {0}")]
    UnknownColor(String),
    #[error("Render error: {0}")]
    Render(String),
}

pub type PlotResult<T> = Result<T, PlotError>;
