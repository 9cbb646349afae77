//! Scatter plots on a subplot grid.

use tracing::debug;

use crate::data::XyData;
use crate::error::{PlotError, PlotResult};
use crate::figure::{
    apply_default_formatting, Cell, Figure, Marker, ScatterTrace, SubplotGrid, Titles, Trace,
};
use crate::style::AppearanceSettings;

/// Where a trace goes: which cell, and which y axis of that cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracePlacement {
    pub cell: Cell,
    pub secondary_y: bool,
}

impl TracePlacement {
    pub fn primary(row: usize, col: usize) -> Self {
        Self {
            cell: Cell::new(row, col),
            secondary_y: false,
        }
    }

    pub fn secondary(row: usize, col: usize) -> Self {
        Self {
            cell: Cell::new(row, col),
            secondary_y: true,
        }
    }
}

/// Options for [`scatter_2d`].
#[derive(Debug, Clone)]
pub struct ScatterOptions {
    pub rows: usize,
    pub cols: usize,
    /// Secondary-axis flag per cell, row-major.
    pub secondary: Vec<bool>,
    /// One legend name per x/y pair.
    pub names: Vec<String>,
    pub titles: Titles,
    /// Explicit placement per trace; round-robin over the cells when `None`.
    pub placements: Option<Vec<TracePlacement>>,
}

impl ScatterOptions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            secondary: Vec::new(),
            names: Vec::new(),
            titles: Titles::new("Plot", "X", "Y"),
            placements: None,
        }
    }

    pub fn secondary(mut self, secondary: Vec<bool>) -> Self {
        self.secondary = secondary;
        self
    }

    pub fn names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.titles.plot = title.into();
        self
    }

    pub fn x_title(mut self, title: impl Into<String>) -> Self {
        self.titles.x = title.into();
        self
    }

    pub fn y_title(mut self, title: impl Into<String>) -> Self {
        self.titles.y = title.into();
        self
    }

    pub fn placements(mut self, placements: Vec<TracePlacement>) -> Self {
        self.placements = Some(placements);
        self
    }
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Build a scatter figure: one trace per x/y pair of `data`.
///
/// Without explicit placements, trace `k` goes to cell `k % cells` (row-major).
/// The first pass over the grid uses primary axes; traces on odd passes use
/// the secondary axis of cells that have one.
pub fn scatter_2d(
    data: &XyData,
    options: &ScatterOptions,
    settings: &AppearanceSettings,
) -> PlotResult<Figure> {
    let grid = SubplotGrid::new(options.rows, options.cols, &options.secondary)?;
    let pairs = data.pairs()?;

    if options.names.len() < pairs.len() {
        return Err(PlotError::MissingNames {
            traces: pairs.len(),
            names: options.names.len(),
        });
    }

    let placements = match &options.placements {
        Some(explicit) => {
            if explicit.len() != pairs.len() {
                return Err(PlotError::PlacementCount {
                    placements: explicit.len(),
                    traces: pairs.len(),
                });
            }
            explicit.clone()
        }
        None => round_robin(&grid, pairs.len()),
    };

    let mut fig = Figure::new(grid);
    let marker = Marker {
        size: settings.size,
        symbol: settings.symbol,
    };

    for (((x, y), name), placement) in pairs.iter().zip(&options.names).zip(&placements) {
        fig.add_trace(Trace::Scatter(ScatterTrace {
            name: name.clone(),
            x: x.to_vec(),
            y: y.to_vec(),
            mode: settings.mode,
            marker,
            cell: placement.cell,
            secondary_y: placement.secondary_y,
        }))?;
    }

    apply_default_formatting(&mut fig, &options.titles, settings);

    debug!(
        traces = fig.trace_count(),
        rows = options.rows,
        cols = options.cols,
        "built scatter figure"
    );
    Ok(fig)
}

fn round_robin(grid: &SubplotGrid, traces: usize) -> Vec<TracePlacement> {
    let cells = grid.cell_count();
    (0..traces)
        .map(|k| {
            let cell = grid.cell_at(k % cells);
            let odd_pass = (k / cells) % 2 == 1;
            TracePlacement {
                cell,
                secondary_y: odd_pass && grid.has_secondary(cell),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_traces() -> XyData {
        XyData::new(vec![
            vec![1.0, 2.0, 3.0],
            vec![1.0, 4.0, 9.0],
            vec![1.0, 2.0, 3.0],
            vec![10.0, 20.0, 30.0],
        ])
    }

    #[test]
    fn one_trace_per_pair_with_names_and_style() {
        let opts = ScatterOptions::new(1, 1).names(["squares", "tens"]);
        let fig = scatter_2d(&two_traces(), &opts, &AppearanceSettings::default()).unwrap();

        assert_eq!(fig.trace_count(), 2);
        let Trace::Scatter(first) = &fig.traces[0] else {
            panic!("expected scatter trace");
        };
        assert_eq!(first.name, "squares");
        assert_eq!(first.y, vec![1.0, 4.0, 9.0]);
        assert_eq!(first.marker.size, 10);
        assert_eq!(fig.layout.title, "Plot");
        assert_eq!(fig.layout.xaxis.title, "X");
        assert_eq!(fig.layout.yaxis.title, "Y");
    }

    #[test]
    fn second_pass_uses_secondary_axis_when_enabled() {
        let opts = ScatterOptions::new(1, 1)
            .secondary(vec![true])
            .names(["a", "b"]);
        let fig = scatter_2d(&two_traces(), &opts, &AppearanceSettings::default()).unwrap();
        let secondary: Vec<bool> = fig.scatter_in(Cell::new(0, 0)).map(|t| t.secondary_y).collect();
        assert_eq!(secondary, vec![false, true]);
    }

    #[test]
    fn traces_spread_over_cells() {
        let opts = ScatterOptions::new(1, 2).names(["a", "b"]);
        let fig = scatter_2d(&two_traces(), &opts, &AppearanceSettings::default()).unwrap();
        assert_eq!(fig.scatter_in(Cell::new(0, 0)).count(), 1);
        assert_eq!(fig.scatter_in(Cell::new(0, 1)).count(), 1);
    }

    #[test]
    fn explicit_placements_are_checked() {
        let opts = ScatterOptions::new(1, 2)
            .names(["a", "b"])
            .placements(vec![TracePlacement::primary(0, 0), TracePlacement::secondary(0, 0)]);
        let err = scatter_2d(&two_traces(), &opts, &AppearanceSettings::default()).unwrap_err();
        assert!(matches!(err, PlotError::NoSecondaryAxis { row: 0, col: 0 }));

        let opts = ScatterOptions::new(1, 2)
            .names(["a", "b"])
            .placements(vec![TracePlacement::primary(0, 0)]);
        let err = scatter_2d(&two_traces(), &opts, &AppearanceSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            PlotError::PlacementCount {
                placements: 1,
                traces: 2
            }
        ));
    }

    #[test]
    fn too_few_names() {
        let opts = ScatterOptions::new(1, 1).names(["only"]);
        let err = scatter_2d(&two_traces(), &opts, &AppearanceSettings::default()).unwrap_err();
        assert!(matches!(err, PlotError::MissingNames { traces: 2, names: 1 }));
    }
}
