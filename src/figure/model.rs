//! Figure description: traces plus layout.
//! Builders produce it, the renderer draws it, serde_json exports it.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::stats::BoxStats;
use crate::style::{
    ExponentFormat, GridDash, LegendSettings, MarkerSymbol, ScatterMode, TickPlacement,
};

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 700;

/// Zero-based subplot cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub size: u32,
    pub symbol: MarkerSymbol,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: ScatterMode,
    pub marker: Marker,
    pub cell: Cell,
    pub secondary_y: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxTrace {
    pub name: String,
    pub values: Vec<f64>,
    pub stats: BoxStats,
}

/// A single plotted data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Box(BoxTrace),
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Scatter(t) => &t.name,
            Trace::Box(t) => &t.name,
        }
    }
}

/// Per-cell subplot options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubplotSpec {
    pub secondary_y: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubplotGrid {
    pub rows: usize,
    pub cols: usize,
    /// `specs[row][col]`
    pub specs: Vec<Vec<SubplotSpec>>,
}

impl Default for SubplotGrid {
    fn default() -> Self {
        Self::single()
    }
}

impl SubplotGrid {
    /// A single cell without a secondary axis.
    pub fn single() -> Self {
        Self {
            rows: 1,
            cols: 1,
            specs: vec![vec![SubplotSpec::default()]],
        }
    }

    /// A `rows x cols` grid; `secondary` flags are read row-major and cells
    /// past the end of the list get no secondary axis.
    pub fn new(rows: usize, cols: usize, secondary: &[bool]) -> PlotResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(PlotError::EmptyGrid { rows, cols });
        }
        let cells = rows * cols;
        if secondary.len() > cells {
            return Err(PlotError::TooManySecondaryFlags {
                flags: secondary.len(),
                cells,
            });
        }

        let specs = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| SubplotSpec {
                        secondary_y: secondary.get(row * cols + col).copied().unwrap_or(false),
                    })
                    .collect()
            })
            .collect();
        Ok(Self { rows, cols, specs })
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Cell for a row-major index.
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    pub fn spec(&self, cell: Cell) -> PlotResult<SubplotSpec> {
        self.specs
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .ok_or(PlotError::CellOutOfGrid {
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    pub fn has_secondary(&self, cell: Cell) -> bool {
        self.spec(cell).map(|s| s.secondary_y).unwrap_or(false)
    }
}

/// Axis appearance. The same settings apply to every subplot's axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub title_font_size: u32,
    pub title_font_family: String,
    pub ticks: TickPlacement,
    pub color: String,
    pub gridcolor: String,
    pub griddash: GridDash,
    pub linecolor: String,
    pub linewidth: u32,
    pub exponentformat: ExponentFormat,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_font_size: 14,
            title_font_family: "sans-serif".to_string(),
            ticks: TickPlacement::Outside,
            color: "#444444".to_string(),
            gridcolor: "white".to_string(),
            griddash: GridDash::Solid,
            linecolor: "#444444".to_string(),
            linewidth: 1,
            exponentformat: ExponentFormat::LowerE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub grid: SubplotGrid,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub showlegend: bool,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub legend: LegendSettings,
    pub width: u32,
    pub height: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: String::new(),
            grid: SubplotGrid::single(),
            xaxis: Axis::default(),
            yaxis: Axis::default(),
            showlegend: true,
            plot_bgcolor: "#E5ECF6".to_string(),
            paper_bgcolor: "white".to_string(),
            legend: LegendSettings::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// A complete figure: what was plotted and how it looks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(grid: SubplotGrid) -> Self {
        Self {
            traces: Vec::new(),
            layout: Layout {
                grid,
                ..Layout::default()
            },
        }
    }

    /// Append a trace, checking scatter placement against the grid.
    pub fn add_trace(&mut self, trace: Trace) -> PlotResult<()> {
        if let Trace::Scatter(t) = &trace {
            let spec = self.layout.grid.spec(t.cell)?;
            if t.secondary_y && !spec.secondary_y {
                return Err(PlotError::NoSecondaryAxis {
                    row: t.cell.row,
                    col: t.cell.col,
                });
            }
        }
        self.traces.push(trace);
        Ok(())
    }

    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }

    /// Scatter traces drawn in `cell`.
    pub fn scatter_in(&self, cell: Cell) -> impl Iterator<Item = &ScatterTrace> {
        self.traces.iter().filter_map(move |t| match t {
            Trace::Scatter(s) if s.cell == cell => Some(s),
            _ => None,
        })
    }

    pub fn box_traces(&self) -> impl Iterator<Item = &BoxTrace> {
        self.traces.iter().filter_map(|t| match t {
            Trace::Box(b) => Some(b),
            _ => None,
        })
    }

    /// Output size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.layout.width = width;
        self.layout.height = height;
        self
    }

    pub fn to_json(&self) -> PlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scatter(cell: Cell, secondary_y: bool) -> Trace {
        Trace::Scatter(ScatterTrace {
            name: "t".into(),
            x: vec![1.0],
            y: vec![2.0],
            mode: ScatterMode::Markers,
            marker: Marker {
                size: 10,
                symbol: MarkerSymbol::Circle,
            },
            cell,
            secondary_y,
        })
    }

    #[test]
    fn grid_reads_secondary_flags_row_major() {
        let grid = SubplotGrid::new(2, 2, &[false, true, true]).unwrap();
        assert!(!grid.has_secondary(Cell::new(0, 0)));
        assert!(grid.has_secondary(Cell::new(0, 1)));
        assert!(grid.has_secondary(Cell::new(1, 0)));
        assert!(!grid.has_secondary(Cell::new(1, 1)));
        assert_eq!(grid.cell_at(3), Cell::new(1, 1));
    }

    #[test]
    fn short_flag_list_pads_with_primary_only_cells() {
        let grid = SubplotGrid::new(2, 2, &[true]).unwrap();
        assert_eq!(grid.cell_count(), 4);
        let flags: Vec<bool> = (0..4).map(|i| grid.has_secondary(grid.cell_at(i))).collect();
        assert_eq!(flags, vec![true, false, false, false]);
        assert_eq!(SubplotGrid::new(2, 2, &[]).unwrap().specs.len(), 2);
    }

    #[test]
    fn grid_rejects_bad_shapes() {
        assert!(matches!(
            SubplotGrid::new(0, 2, &[]),
            Err(PlotError::EmptyGrid { rows: 0, cols: 2 })
        ));
        assert!(matches!(
            SubplotGrid::new(1, 1, &[true, false]),
            Err(PlotError::TooManySecondaryFlags { flags: 2, cells: 1 })
        ));
    }

    #[test]
    fn add_trace_checks_placement() {
        let mut fig = Figure::new(SubplotGrid::new(1, 2, &[false, true]).unwrap());
        fig.add_trace(scatter(Cell::new(0, 1), true)).unwrap();
        assert!(matches!(
            fig.add_trace(scatter(Cell::new(0, 0), true)),
            Err(PlotError::NoSecondaryAxis { row: 0, col: 0 })
        ));
        assert!(matches!(
            fig.add_trace(scatter(Cell::new(1, 0), false)),
            Err(PlotError::CellOutOfGrid { .. })
        ));
        assert_eq!(fig.trace_count(), 1);
        assert_eq!(fig.scatter_in(Cell::new(0, 1)).count(), 1);
    }

    #[test]
    fn json_round_trip_keeps_trace_tag() {
        let mut fig = Figure::new(SubplotGrid::single());
        fig.add_trace(scatter(Cell::default(), false)).unwrap();
        let json = fig.to_json().unwrap();
        assert!(json.contains("\"type\": \"scatter\""));
        assert_eq!(Figure::from_json(&json).unwrap(), fig);
    }
}
