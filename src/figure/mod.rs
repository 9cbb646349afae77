//! Figure module - figure description and shared formatting

mod format;
mod model;

pub use format::{apply_default_formatting, format_layout, format_x_axis, format_y_axis, Titles};
pub use model::{
    Axis, BoxTrace, Cell, Figure, Layout, Marker, ScatterTrace, SubplotGrid, SubplotSpec, Trace,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
