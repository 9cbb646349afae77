//! Appearance settings shared by every plot builder.
//! Defaults reproduce the stock look: dark slate axes, dotted light-gray grid,
//! whitesmoke plot area on a seashell page, lavender legend.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PlotResult;

/// How scatter traces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScatterMode {
    #[default]
    Markers,
    Lines,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

impl ScatterMode {
    pub fn draws_markers(self) -> bool {
        matches!(self, ScatterMode::Markers | ScatterMode::LinesMarkers)
    }

    pub fn draws_lines(self) -> bool {
        matches!(self, ScatterMode::Lines | ScatterMode::LinesMarkers)
    }
}

/// Marker shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerSymbol {
    #[default]
    Circle,
    Square,
    Diamond,
    TriangleUp,
    Cross,
}

/// Where tick marks sit relative to the axis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickPlacement {
    #[default]
    Outside,
    Inside,
    #[serde(rename = "")]
    None,
}

/// Grid line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridDash {
    Solid,
    #[default]
    Dot,
    Dash,
}

/// Tick label exponent notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExponentFormat {
    /// Plain digits, no exponent at all.
    #[default]
    None,
    /// `1.5e+6`
    #[serde(rename = "e")]
    LowerE,
    /// `1.5E+6`
    #[serde(rename = "E")]
    UpperE,
    /// `1.5×10^6`
    Power,
    /// SI prefixes: `1.5M`
    #[serde(rename = "SI")]
    Si,
}

/// What clicking a legend item does in interactive viewers. Carried through to
/// the figure description; static renders ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemClick {
    #[default]
    Toggle,
    ToggleOthers,
    #[serde(rename = "false")]
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendSettings {
    pub title: String,
    pub bordercolor: String,
    pub bgcolor: String,
    pub borderwidth: u32,
    pub font_color: String,
    pub font_size: u32,
    pub itemclick: ItemClick,
}

impl Default for LegendSettings {
    fn default() -> Self {
        Self {
            title: "Legends".to_string(),
            bordercolor: "black".to_string(),
            bgcolor: "#E6E6FA".to_string(),
            borderwidth: 2,
            font_color: "midnightblue".to_string(),
            font_size: 12,
            itemclick: ItemClick::Toggle,
        }
    }
}

/// Presentation constants applied to traces, axes and layout.
///
/// Deserializes with `#[serde(default)]`, so a JSON file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub mode: ScatterMode,
    pub size: u32,
    pub symbol: MarkerSymbol,
    pub title_font_size: u32,
    pub title_font_family: String,
    pub ticks: TickPlacement,
    pub color: String,
    pub gridcolor: String,
    pub griddash: GridDash,
    pub linecolor: String,
    pub linewidth: u32,
    pub exponentformat: ExponentFormat,
    pub showlegend: bool,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub legend: LegendSettings,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            mode: ScatterMode::Markers,
            size: 10,
            symbol: MarkerSymbol::Circle,
            title_font_size: 17,
            title_font_family: "calibri".to_string(),
            ticks: TickPlacement::Outside,
            color: "#2F4F4F".to_string(),
            gridcolor: "lightgray".to_string(),
            griddash: GridDash::Dot,
            linecolor: "#2F4F4F".to_string(),
            linewidth: 2,
            exponentformat: ExponentFormat::None,
            showlegend: true,
            plot_bgcolor: "Whitesmoke".to_string(),
            paper_bgcolor: "#FFF5EE".to_string(),
            legend: LegendSettings::default(),
        }
    }
}

impl AppearanceSettings {
    /// Parse settings from JSON, keeping defaults for missing keys.
    pub fn from_json_str(json: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
