//! CSV file in, figure out.

use std::io::Write;
use std::path::PathBuf;

use ezplot::figure::{Cell, Figure, Trace};
use ezplot::style::{ExponentFormat, GridDash, ScatterMode};
use ezplot::{
    box_plot, scatter_2d, AppearanceSettings, BoxOptions, DataLoader, PlotError, ScatterOptions,
    XyData,
};

fn write_csv(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ezplot_it_{}_{}.csv", name, std::process::id()));
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(body.as_bytes()).unwrap();
    path
}

const MEASUREMENTS: &str = "\
t,temp,t2,pressure,site
0,12.5,0,1010,a
1,13.0,1,1012,a
2,14.5,2,1009,b
3,13.5,3,1015,b
4,15.0,4,1011,c
";

#[test]
fn scatter_from_csv_with_secondary_axis() {
    let path = write_csv("scatter", MEASUREMENTS);
    let loader = DataLoader::load_csv(&path).unwrap();
    let columns: Vec<String> = ["t", "temp", "t2", "pressure"].map(String::from).to_vec();
    let data = XyData::from_columns(loader.dataframe(), &columns).unwrap();

    let options = ScatterOptions::new(1, 1)
        .secondary(vec![true])
        .names(["temperature", "pressure"])
        .title("Station")
        .y_title("°C");
    let fig = scatter_2d(&data, &options, &AppearanceSettings::default()).unwrap();

    assert_eq!(fig.trace_count(), 2);
    let traces: Vec<_> = fig.scatter_in(Cell::new(0, 0)).collect();
    assert!(!traces[0].secondary_y);
    assert!(traces[1].secondary_y);
    assert_eq!(traces[1].y, vec![1010.0, 1012.0, 1009.0, 1015.0, 1011.0]);
    assert_eq!(fig.layout.title, "Station");
    assert_eq!(fig.layout.yaxis.title, "°C");
    assert_eq!(fig.layout.xaxis.title, "X");

    std::fs::remove_file(path).ok();
}

#[test]
fn text_column_cannot_be_a_series() {
    let path = write_csv("text", MEASUREMENTS);
    let loader = DataLoader::load_csv(&path).unwrap();
    let columns = vec!["t".to_string(), "site".to_string()];
    let err = XyData::from_columns(loader.dataframe(), &columns).unwrap_err();
    assert!(matches!(err, PlotError::NonNumericColumn { ref name, .. } if name == "site"));

    std::fs::remove_file(path).ok();
}

#[test]
fn box_plot_over_numeric_columns() {
    let path = write_csv("box", MEASUREMENTS);
    let loader = DataLoader::load_csv(&path).unwrap();
    let vars = vec!["temp".to_string(), "pressure".to_string()];
    let options = BoxOptions::default().title("Spread").y_title("value");
    let fig = box_plot(loader.dataframe(), &vars, &options, &AppearanceSettings::default()).unwrap();

    let medians: Vec<f64> = fig.box_traces().map(|b| b.stats.median).collect();
    assert_eq!(medians, vec![13.5, 1011.0]);
    let counts: Vec<usize> = fig.box_traces().map(|b| b.stats.count).collect();
    assert_eq!(counts, vec![5, 5]);
    assert_eq!(fig.layout.title, "Spread");
    assert_eq!(fig.layout.yaxis.title, "value");

    std::fs::remove_file(path).ok();
}

#[test]
fn appearance_file_restyles_every_figure() {
    let settings = AppearanceSettings::from_json_str(
        r#"{
            "mode": "lines+markers",
            "exponentformat": "e",
            "griddash": "dash",
            "title_font_family": "Arial",
            "showlegend": false
        }"#,
    )
    .unwrap();

    let data = XyData::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let fig = scatter_2d(&data, &ScatterOptions::new(1, 1).names(["a"]), &settings).unwrap();

    let Trace::Scatter(trace) = &fig.traces[0] else {
        panic!("expected scatter trace");
    };
    assert_eq!(trace.mode, ScatterMode::LinesMarkers);
    for axis in [&fig.layout.xaxis, &fig.layout.yaxis] {
        assert_eq!(axis.exponentformat, ExponentFormat::LowerE);
        assert_eq!(axis.griddash, GridDash::Dash);
        assert_eq!(axis.title_font_family, "Arial");
    }
    assert!(!fig.layout.showlegend);
    // untouched keys keep their defaults
    assert_eq!(fig.layout.plot_bgcolor, "Whitesmoke");
}

#[test]
fn figure_survives_json_export() {
    let data = XyData::new(vec![
        vec![1.0, 2.0, 3.0],
        vec![1.0, 4.0, 9.0],
        vec![1.0, 2.0, 3.0],
        vec![2.0, 3.0, 4.0],
        vec![0.5, 1.5, 2.5],
        vec![9.0, 8.0, 7.0],
    ]);
    let options = ScatterOptions::new(2, 1)
        .secondary(vec![true, false])
        .names(["a", "b", "c"]);
    let fig = scatter_2d(&data, &options, &AppearanceSettings::default()).unwrap();

    let json = fig.to_json().unwrap();
    assert!(json.contains("\"type\": \"scatter\""));
    let back = Figure::from_json(&json).unwrap();
    assert_eq!(back, fig);

    // third trace wraps back to the first cell, on its secondary axis
    let first_cell: Vec<bool> = back.scatter_in(Cell::new(0, 0)).map(|t| t.secondary_y).collect();
    assert_eq!(first_cell, vec![false, true]);
}
