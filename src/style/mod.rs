//! Style module - appearance constants and color handling

mod appearance;
pub mod color;

pub use appearance::{
    AppearanceSettings, ExponentFormat, GridDash, ItemClick, LegendSettings, MarkerSymbol,
    ScatterMode, TickPlacement,
};
pub use color::{parse_color, Rgb};
