//! ezplot - scatter & box plots from CSV files
//!
//! Thin command line front-end over the `ezplot` library.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use cli::{BoxArgs, Cli, Command, OutputArgs, OutputFormat, ScatterArgs};
use ezplot::figure::Figure;
use ezplot::{
    box_plot, render, scatter_2d, AppearanceSettings, BoxOptions, DataLoader, ScatterOptions,
    XyData,
};

fn main() -> Result<()> {
    if !ezplot::telemetry::init_default_tracing() {
        debug!("tracing subscriber already installed");
    }
    let cli = Cli::parse();

    let settings = match &cli.appearance {
        Some(path) => AppearanceSettings::load(path)
            .with_context(|| format!("loading appearance from {}", path.display()))?,
        None => AppearanceSettings::default(),
    };

    match cli.cmd {
        Command::Scatter(args) => run_scatter(args, &settings),
        Command::Box(args) => run_box(args, &settings),
    }
}

fn load(path: &std::path::Path) -> Result<DataLoader> {
    DataLoader::load_csv(path).with_context(|| format!("reading {}", path.display()))
}

fn run_scatter(args: ScatterArgs, settings: &AppearanceSettings) -> Result<()> {
    let format = output_format(&args.output)?;
    let loader = load(&args.file)?;
    let columns = if args.columns.is_empty() {
        loader.numeric_columns()
    } else {
        args.columns
    };
    let data = XyData::from_columns(loader.dataframe(), &columns)?;

    let names: Vec<String> = if args.names.is_empty() {
        // y column of each pair
        columns.iter().skip(1).step_by(2).cloned().collect()
    } else {
        args.names
    };
    let mut options = ScatterOptions::new(args.rows, args.cols)
        .secondary(args.secondary)
        .names(names);
    if let Some(title) = &args.output.title {
        options = options.title(title);
    }
    if let Some(title) = &args.output.x_title {
        options = options.x_title(title);
    }
    if let Some(title) = &args.output.y_title {
        options = options.y_title(title);
    }

    let fig = scatter_2d(&data, &options, settings)?;
    write_figure(fig, &args.output, format)
}

fn run_box(args: BoxArgs, settings: &AppearanceSettings) -> Result<()> {
    let format = output_format(&args.output)?;
    let loader = load(&args.file)?;
    let columns = if args.columns.is_empty() {
        loader.numeric_columns()
    } else {
        args.columns
    };

    let mut options = BoxOptions::default();
    if let Some(title) = &args.output.title {
        options = options.title(title);
    }
    if let Some(title) = &args.output.x_title {
        options = options.x_title(title);
    }
    if let Some(title) = &args.output.y_title {
        options = options.y_title(title);
    }

    let fig = box_plot(loader.dataframe(), &columns, &options, settings)?;
    write_figure(fig, &args.output, format)
}

fn output_format(output: &OutputArgs) -> Result<OutputFormat> {
    match OutputFormat::from_path(&output.output) {
        Some(format) => Ok(format),
        None => bail!(
            "cannot tell output format from {} (use .svg, .png or .json)",
            output.output.display()
        ),
    }
}

fn write_figure(fig: Figure, output: &OutputArgs, format: OutputFormat) -> Result<()> {
    let width = output.width.unwrap_or(fig.layout.width);
    let height = output.height.unwrap_or(fig.layout.height);
    let fig = fig.size(width, height);
    let path = &output.output;

    match format {
        OutputFormat::Svg => render::save_svg(&fig, path)?,
        OutputFormat::Png => render::save_png(&fig, path)?,
        OutputFormat::Json => std::fs::write(path, fig.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?,
    }
    info!(path = %path.display(), traces = fig.trace_count(), "figure written");
    Ok(())
}
