//! Data module - CSV loading and series extraction

mod loader;
mod series;

pub use loader::{is_numeric, DataLoader};
pub use series::{column_values, XyData};
