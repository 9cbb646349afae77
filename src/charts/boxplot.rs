//! Box plots of DataFrame columns.

use polars::prelude::DataFrame;
use tracing::debug;

use crate::data::column_values;
use crate::error::{PlotError, PlotResult};
use crate::figure::{apply_default_formatting, BoxTrace, Figure, SubplotGrid, Titles, Trace};
use crate::stats::StatsCalculator;
use crate::style::AppearanceSettings;

/// Options for [`box_plot`]. Axis titles are empty by default.
#[derive(Debug, Clone)]
pub struct BoxOptions {
    pub titles: Titles,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            titles: Titles::new("Plot", "", ""),
        }
    }
}

impl BoxOptions {
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
}

/// One box per column in `variables_to_plot`, in the given order.
pub fn box_plot(
    frame: &DataFrame,
    variables_to_plot: &[String],
    options: &BoxOptions,
    settings: &AppearanceSettings,
) -> PlotResult<Figure> {
    if variables_to_plot.is_empty() {
        return Err(PlotError::NoVariables);
    }

    let columns = variables_to_plot
        .iter()
        .map(|name| column_values(frame, name))
        .collect::<PlotResult<Vec<_>>>()?;
    let stats = StatsCalculator::compute_all_parallel(&columns);

    let mut fig = Figure::new(SubplotGrid::single());
    for ((name, values), stats) in variables_to_plot.iter().zip(columns).zip(stats) {
        fig.add_trace(Trace::Box(BoxTrace {
            name: name.clone(),
            values,
            stats,
        }))?;
    }

    apply_default_formatting(&mut fig, &options.titles, settings);

    debug!(boxes = fig.trace_count(), "built box figure");
    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("height".into(), [1.0, 2.0, 3.0, 4.0, 5.0]),
            Column::new("weight".into(), [10i32, 20, 30, 40, 50]),
            Column::new("name".into(), ["a", "b", "c", "d", "e"]),
        ])
        .unwrap()
    }

    #[test]
    fn one_box_per_selected_column() {
        let vars = vec!["weight".to_string(), "height".to_string()];
        let fig = box_plot(&frame(), &vars, &BoxOptions::default(), &AppearanceSettings::default())
            .unwrap();

        let names: Vec<&str> = fig.traces.iter().map(Trace::name).collect();
        assert_eq!(names, vec!["weight", "height"]);

        let medians: Vec<f64> = fig.box_traces().map(|b| b.stats.median).collect();
        assert_eq!(medians, vec![30.0, 3.0]);
        assert_eq!(fig.layout.title, "Plot");
        assert_eq!(fig.layout.xaxis.title, "");
        assert_eq!(fig.layout.xaxis.title_font_family, "calibri");
    }

    #[test]
    fn missing_and_non_numeric_columns() {
        let settings = AppearanceSettings::default();
        let err = box_plot(&frame(), &["nope".to_string()], &BoxOptions::default(), &settings)
            .unwrap_err();
        assert!(matches!(err, PlotError::UnknownColumn(name) if name == "nope"));

        let err = box_plot(&frame(), &["name".to_string()], &BoxOptions::default(), &settings)
            .unwrap_err();
        assert!(matches!(err, PlotError::NonNumericColumn { .. }));

        let err = box_plot(&frame(), &[], &BoxOptions::default(), &settings).unwrap_err();
        assert!(matches!(err, PlotError::NoVariables));
    }
}
