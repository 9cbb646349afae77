//! Charts module - plot builders

mod boxplot;
mod scatter;

pub use boxplot::{box_plot, BoxOptions};
pub use scatter::{scatter_2d, ScatterOptions, TracePlacement};
