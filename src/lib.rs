//! ezplot - scatter & box plot builders
//!
//! Builders take caller data plus one [`AppearanceSettings`] value and return a
//! [`Figure`]: traces, subplot grid, styled axes and legend. Figures are drawn
//! through `plotters` (SVG, PNG, in-memory image) or exported as JSON.
//!
//! ```no_run
//! use ezplot::{scatter_2d, AppearanceSettings, ScatterOptions, XyData};
//!
//! # fn main() -> Result<(), ezplot::PlotError> {
//! let data = XyData::new(vec![
//!     vec![1.0, 2.0, 3.0],
//!     vec![2.0, 4.0, 8.0],
//!     vec![1.0, 2.0, 3.0],
//!     vec![300.0, 200.0, 100.0],
//! ]);
//! let options = ScatterOptions::new(1, 1)
//!     .secondary(vec![true])
//!     .names(["growth", "decay"]);
//! let fig = scatter_2d(&data, &options, &AppearanceSettings::default())?;
//! ezplot::render::save_svg(&fig, "scatter.svg")?;
//! # Ok(())
//! # }
//! ```

pub mod charts;
pub mod data;
pub mod error;
pub mod figure;
pub mod render;
pub mod stats;
pub mod style;
pub mod telemetry;

pub use charts::{box_plot, scatter_2d, BoxOptions, ScatterOptions, TracePlacement};
pub use data::{DataLoader, XyData};
pub use error::{PlotError, PlotResult};
pub use figure::{Figure, Titles};
pub use style::AppearanceSettings;
