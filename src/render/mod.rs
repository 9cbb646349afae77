//! Render module - draws figures through plotters
//!
//! Layout of a rendered figure:
//! 1. Page filled with the paper background, plot title centered on top
//! 2. Legend box on the right when the legend is shown
//! 3. Subplot grid split evenly; each cell gets its own axes, the right-hand
//!    axis only when the cell has a secondary y axis
//! 4. Box figures use a single cell with one category per box

mod legend;
mod ticks;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;
use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::figure::{Axis, BoxTrace, Cell, Figure, ScatterTrace, Trace};
use crate::style::color::trace_color;
use crate::style::{parse_color, ExponentFormat, GridDash, MarkerSymbol, TickPlacement};

pub use legend::{legend_entries, Glyph, LegendEntry, LEGEND_WIDTH};
pub use ticks::{format_tick, nice_ticks, padded_range, tick_step, TICK_TARGET};

const TICK_LABEL_SIZE: f64 = 12.0;
const X_LABEL_AREA: u32 = 50;
const Y_LABEL_AREA: u32 = 70;
const BOX_HALF_WIDTH: f64 = 0.25;
const WHISKER_CAP: f64 = 0.1;

/// Render a figure to an SVG document.
pub fn to_svg_string(fig: &Figure) -> PlotResult<String> {
    let size = (fig.layout.width, fig.layout.height);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_figure(&root, fig)?;
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

/// Render a figure to an RGB image.
pub fn to_rgb_image(fig: &Figure) -> PlotResult<image::RgbImage> {
    let (w, h) = (fig.layout.width, fig.layout.height);
    let mut buf = vec![0u8; w as usize * h as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        draw_figure(&root, fig)?;
        root.present().map_err(render_err)?;
    }
    image::RgbImage::from_raw(w, h, buf)
        .ok_or_else(|| PlotError::Render("pixel buffer does not match image size".to_string()))
}

pub fn save_svg(fig: &Figure, path: impl AsRef<Path>) -> PlotResult<()> {
    let svg = to_svg_string(fig)?;
    std::fs::write(path.as_ref(), svg)?;
    debug!(path = %path.as_ref().display(), "wrote svg");
    Ok(())
}

/// Save as PNG (or any raster format the path extension names).
pub fn save_png(fig: &Figure, path: impl AsRef<Path>) -> PlotResult<()> {
    to_rgb_image(fig)?.save(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "wrote image");
    Ok(())
}

pub(crate) fn render_err(e: impl std::fmt::Display) -> PlotError {
    PlotError::Render(e.to_string())
}

pub(crate) fn resolve(color: &str) -> PlotResult<RGBColor> {
    let rgb = parse_color(color)?;
    Ok(RGBColor(rgb.0, rgb.1, rgb.2))
}

fn palette_color(index: usize) -> RGBColor {
    let rgb = trace_color(index);
    RGBColor(rgb.0, rgb.1, rgb.2)
}

/// Axis settings with colors resolved.
struct AxisPaint<'a> {
    title: &'a str,
    family: &'a str,
    title_size: f64,
    text: RGBColor,
    line: RGBColor,
    grid: RGBColor,
    width: u32,
    dash: GridDash,
    ticks: TickPlacement,
    format: ExponentFormat,
}

impl<'a> AxisPaint<'a> {
    fn resolve(axis: &'a Axis) -> PlotResult<Self> {
        Ok(Self {
            title: &axis.title,
            family: &axis.title_font_family,
            title_size: f64::from(axis.title_font_size),
            text: resolve(&axis.color)?,
            line: resolve(&axis.linecolor)?,
            grid: resolve(&axis.gridcolor)?,
            width: axis.linewidth,
            dash: axis.griddash,
            ticks: axis.ticks,
            format: axis.exponentformat,
        })
    }

    fn title_style(&self) -> TextStyle<'a> {
        (self.family, self.title_size).into_font().color(&self.text)
    }

    fn label_style(&self) -> TextStyle<'a> {
        (self.family, TICK_LABEL_SIZE).into_font().color(&self.text)
    }

    fn line_style(&self) -> ShapeStyle {
        self.line.stroke_width(self.width)
    }

    fn tick_mark_size(&self) -> i32 {
        match self.ticks {
            TickPlacement::Outside => 5,
            TickPlacement::Inside => -5,
            TickPlacement::None => 0,
        }
    }
}

/// On/off lengths in pixels, `None` for a solid line.
fn dash_pattern(dash: GridDash) -> Option<(f64, f64)> {
    match dash {
        GridDash::Solid => None,
        GridDash::Dot => Some((2.0, 3.0)),
        GridDash::Dash => Some((6.0, 4.0)),
    }
}

/// Split the segment `from -> to` into dashes.
pub(crate) fn dash_segments(
    from: (i32, i32),
    to: (i32, i32),
    on: f64,
    off: f64,
) -> Vec<((i32, i32), (i32, i32))> {
    let (dx, dy) = (f64::from(to.0 - from.0), f64::from(to.1 - from.1));
    let len = dx.hypot(dy);
    if len == 0.0 || on <= 0.0 {
        return Vec::new();
    }
    let (ux, uy) = (dx / len, dy / len);
    let at = |d: f64| {
        (
            from.0 + (ux * d).round() as i32,
            from.1 + (uy * d).round() as i32,
        )
    };

    let mut segments = Vec::new();
    let mut start = 0.0;
    while start < len {
        let end = (start + on).min(len);
        segments.push((at(start), at(end)));
        start = end + off;
    }
    segments
}

fn draw_grid_line<DB: DrawingBackend>(
    canvas: &DrawingArea<DB, Shift>,
    from: (i32, i32),
    to: (i32, i32),
    axis: &AxisPaint,
) -> PlotResult<()> {
    let style = axis.grid.stroke_width(1);
    match dash_pattern(axis.dash) {
        None => canvas
            .draw(&PathElement::new(vec![from, to], style))
            .map_err(render_err),
        Some((on, off)) => {
            for (a, b) in dash_segments(from, to, on, off) {
                canvas
                    .draw(&PathElement::new(vec![a, b], style))
                    .map_err(render_err)?;
            }
            Ok(())
        }
    }
}

/// Draw one marker centered on a pixel position. `size` is the diameter.
pub(crate) fn draw_marker<DB: DrawingBackend>(
    canvas: &DrawingArea<DB, Shift>,
    at: (i32, i32),
    symbol: MarkerSymbol,
    size: u32,
    color: RGBColor,
) -> PlotResult<()> {
    let r = (size / 2).max(1) as i32;
    let (x, y) = at;
    let fill = color.filled();
    let drawn = match symbol {
        MarkerSymbol::Circle => canvas.draw(&Circle::new(at, r, fill)),
        MarkerSymbol::Square => canvas.draw(&Rectangle::new([(x - r, y - r), (x + r, y + r)], fill)),
        MarkerSymbol::Diamond => canvas.draw(&Polygon::new(
            vec![(x, y - r), (x + r, y), (x, y + r), (x - r, y)],
            fill,
        )),
        MarkerSymbol::TriangleUp => canvas.draw(&Polygon::new(
            vec![(x, y - r), (x + r, y + r), (x - r, y + r)],
            fill,
        )),
        MarkerSymbol::Cross => {
            let stroke = color.stroke_width(2);
            canvas
                .draw(&PathElement::new(vec![(x - r, y - r), (x + r, y + r)], stroke))
                .and_then(|_| {
                    canvas.draw(&PathElement::new(vec![(x - r, y + r), (x + r, y - r)], stroke))
                })
        }
    };
    drawn.map_err(render_err)
}

fn draw_scatter_trace<DB: DrawingBackend>(
    canvas: &DrawingArea<DB, Shift>,
    pixels: &[(i32, i32)],
    trace: &ScatterTrace,
    color: RGBColor,
) -> PlotResult<()> {
    if trace.mode.draws_lines() && pixels.len() > 1 {
        canvas
            .draw(&PathElement::new(pixels.to_vec(), color.stroke_width(2)))
            .map_err(render_err)?;
    }
    if trace.mode.draws_markers() {
        for &p in pixels {
            draw_marker(canvas, p, trace.marker.symbol, trace.marker.size, color)?;
        }
    }
    Ok(())
}

/// Draw a figure onto a backend's root area.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    fig: &Figure,
) -> PlotResult<()> {
    let layout = &fig.layout;
    root.fill(&resolve(&layout.paper_bgcolor)?)
        .map_err(render_err)?;

    let x_axis = AxisPaint::resolve(&layout.xaxis)?;
    let y_axis = AxisPaint::resolve(&layout.yaxis)?;
    let plot_bg = resolve(&layout.plot_bgcolor)?;

    let titled;
    let area = if layout.title.is_empty() {
        root
    } else {
        let style = (x_axis.family, x_axis.title_size + 5.0)
            .into_font()
            .color(&x_axis.text);
        titled = root.titled(&layout.title, style).map_err(render_err)?;
        &titled
    };

    let entries = legend_entries(fig);
    let show_legend = layout.showlegend && !entries.is_empty();
    let legend_width = if show_legend { LEGEND_WIDTH } else { 0 };
    let (w, _) = area.dim_in_pixel();
    let (plot_area, legend_area) = area.split_horizontally(w.saturating_sub(legend_width));

    if fig.box_traces().next().is_some() {
        draw_box_chart(root, &plot_area, fig, &x_axis, &y_axis, plot_bg)?;
    } else {
        let grid = &layout.grid;
        let cells = plot_area.split_evenly((grid.rows, grid.cols));
        for (i, cell_area) in cells.iter().enumerate() {
            draw_scatter_cell(root, cell_area, fig, grid.cell_at(i), &x_axis, &y_axis, plot_bg)?;
        }
    }

    if show_legend {
        legend::draw_legend(&legend_area, &layout.legend, x_axis.family, &entries)?;
    }
    Ok(())
}

/// Range, tick positions and tick spacing of one axis.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AxisScale {
    pub range: Range<f64>,
    pub ticks: Vec<f64>,
    pub step: f64,
}

impl AxisScale {
    fn fit(values: impl IntoIterator<Item = f64>) -> Self {
        let range = padded_range(values);
        let ticks = nice_ticks(range.start, range.end, TICK_TARGET);
        let step = tick_step(range.start, range.end, TICK_TARGET);
        Self { range, ticks, step }
    }

    fn labels(&self, format: ExponentFormat) -> impl Iterator<Item = (f64, String)> + '_ {
        self.ticks
            .iter()
            .map(move |&t| (t, format_tick(t, self.step, format)))
    }
}

/// Axis scales of one subplot cell. `y2` is set only when the cell has a
/// secondary y axis.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CellScales {
    pub x: AxisScale,
    pub y: AxisScale,
    pub y2: Option<AxisScale>,
}

pub(crate) fn cell_scales(fig: &Figure, cell: Cell) -> CellScales {
    let traces: Vec<&ScatterTrace> = fig.scatter_in(cell).collect();
    let x = AxisScale::fit(traces.iter().flat_map(|t| t.x.iter().copied()));
    let y = AxisScale::fit(
        traces
            .iter()
            .filter(|t| !t.secondary_y)
            .flat_map(|t| t.y.iter().copied()),
    );
    let y2 = fig.layout.grid.has_secondary(cell).then(|| {
        AxisScale::fit(
            traces
                .iter()
                .filter(|t| t.secondary_y)
                .flat_map(|t| t.y.iter().copied()),
        )
    });
    CellScales { x, y, y2 }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Bottom,
    Left,
    Right,
}

/// Tick marks and labels along one edge of a plotting area. Each tick is the
/// pixel on the edge plus its label.
fn draw_ticks<DB: DrawingBackend>(
    canvas: &DrawingArea<DB, Shift>,
    axis: &AxisPaint,
    side: Side,
    ticks: &[((i32, i32), String)],
) -> PlotResult<()> {
    let mark = axis.tick_mark_size();
    let gap = mark.max(0) + 4;
    let (dir, anchor) = match side {
        Side::Bottom => ((0, 1), Pos::new(HPos::Center, VPos::Top)),
        Side::Left => ((-1, 0), Pos::new(HPos::Right, VPos::Center)),
        Side::Right => ((1, 0), Pos::new(HPos::Left, VPos::Center)),
    };
    let style = axis.label_style().pos(anchor);
    let stroke = axis.line.stroke_width(1);

    for &((x, y), ref label) in ticks {
        if mark != 0 {
            canvas
                .draw(&PathElement::new(
                    vec![(x, y), (x + dir.0 * mark, y + dir.1 * mark)],
                    stroke,
                ))
                .map_err(render_err)?;
        }
        canvas
            .draw_text(label, &style, (x + dir.0 * gap, y + dir.1 * gap))
            .map_err(render_err)?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_scatter_cell<DB: DrawingBackend>(
    canvas: &DrawingArea<DB, Shift>,
    area: &DrawingArea<DB, Shift>,
    fig: &Figure,
    cell: Cell,
    x_axis: &AxisPaint,
    y_axis: &AxisPaint,
    plot_bg: RGBColor,
) -> PlotResult<()> {
    let scales = cell_scales(fig, cell);
    let (x, y) = (&scales.x, &scales.y);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(12)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA);
    if scales.y2.is_some() {
        builder.right_y_label_area_size(Y_LABEL_AREA);
    }
    let mut chart = builder
        .build_cartesian_2d(x.range.clone(), y.range.clone())
        .map_err(render_err)?;

    chart.plotting_area().fill(&plot_bg).map_err(render_err)?;

    for &t in &x.ticks {
        let from = chart.backend_coord(&(t, y.range.start));
        let to = chart.backend_coord(&(t, y.range.end));
        draw_grid_line(canvas, from, to, x_axis)?;
    }
    for &t in &y.ticks {
        let from = chart.backend_coord(&(x.range.start, t));
        let to = chart.backend_coord(&(x.range.end, t));
        draw_grid_line(canvas, from, to, y_axis)?;
    }

    // ticks are drawn by hand so labels sit on the grid lines
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_labels(0)
        .x_desc(x_axis.title)
        .y_desc(y_axis.title)
        .axis_desc_style(x_axis.title_style())
        .axis_style(x_axis.line_style())
        .draw()
        .map_err(render_err)?;

    let bottom: Vec<_> = x
        .labels(x_axis.format)
        .map(|(t, label)| (chart.backend_coord(&(t, y.range.start)), label))
        .collect();
    draw_ticks(canvas, x_axis, Side::Bottom, &bottom)?;
    let left: Vec<_> = y
        .labels(y_axis.format)
        .map(|(t, label)| (chart.backend_coord(&(x.range.start, t)), label))
        .collect();
    draw_ticks(canvas, y_axis, Side::Left, &left)?;

    let mut primary = Vec::new();
    let mut secondary = Vec::new();
    for (idx, trace) in fig.traces.iter().enumerate() {
        if let Trace::Scatter(s) = trace {
            if s.cell == cell {
                if s.secondary_y {
                    secondary.push((idx, s));
                } else {
                    primary.push((idx, s));
                }
            }
        }
    }

    for (idx, trace) in &primary {
        let pixels: Vec<(i32, i32)> = trace
            .x
            .iter()
            .zip(&trace.y)
            .map(|(&px, &py)| chart.backend_coord(&(px, py)))
            .collect();
        draw_scatter_trace(canvas, &pixels, trace, palette_color(*idx))?;
    }

    let Some(y2) = &scales.y2 else {
        return Ok(());
    };

    let mut chart = chart.set_secondary_coord(x.range.clone(), y2.range.clone());
    chart
        .configure_secondary_axes()
        .x_labels(0)
        .y_labels(0)
        .axis_style(y_axis.line_style())
        .draw()
        .map_err(render_err)?;

    let right: Vec<_> = y2
        .labels(y_axis.format)
        .map(|(t, label)| {
            let at = chart.borrow_secondary().backend_coord(&(x.range.end, t));
            (at, label)
        })
        .collect();
    draw_ticks(canvas, y_axis, Side::Right, &right)?;

    for (idx, trace) in &secondary {
        let pixels: Vec<(i32, i32)> = trace
            .x
            .iter()
            .zip(&trace.y)
            .map(|(&px, &py)| chart.borrow_secondary().backend_coord(&(px, py)))
            .collect();
        draw_scatter_trace(canvas, &pixels, trace, palette_color(*idx))?;
    }
    Ok(())
}

fn draw_box_chart<DB: DrawingBackend>(
    canvas: &DrawingArea<DB, Shift>,
    area: &DrawingArea<DB, Shift>,
    fig: &Figure,
    x_axis: &AxisPaint,
    y_axis: &AxisPaint,
    plot_bg: RGBColor,
) -> PlotResult<()> {
    let boxes: Vec<(usize, &BoxTrace)> = fig
        .traces
        .iter()
        .enumerate()
        .filter_map(|(i, t)| match t {
            Trace::Box(b) => Some((i, b)),
            _ => None,
        })
        .collect();

    let x_range = -0.5..(boxes.len() as f64 - 0.5);
    let y = AxisScale::fit(
        boxes
            .iter()
            .filter_map(|(_, b)| b.stats.extent())
            .flat_map(|(lo, hi)| [lo, hi]),
    );

    let mut chart = ChartBuilder::on(area)
        .margin(12)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_range.clone(), y.range.clone())
        .map_err(render_err)?;

    chart.plotting_area().fill(&plot_bg).map_err(render_err)?;
    for &t in &y.ticks {
        let from = chart.backend_coord(&(x_range.start, t));
        let to = chart.backend_coord(&(x_range.end, t));
        draw_grid_line(canvas, from, to, y_axis)?;
    }

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_labels(0)
        .x_desc(x_axis.title)
        .y_desc(y_axis.title)
        .axis_desc_style(x_axis.title_style())
        .axis_style(x_axis.line_style())
        .draw()
        .map_err(render_err)?;

    let categories: Vec<_> = boxes
        .iter()
        .enumerate()
        .map(|(k, (_, b))| (chart.backend_coord(&(k as f64, y.range.start)), b.name.clone()))
        .collect();
    draw_ticks(canvas, x_axis, Side::Bottom, &categories)?;
    let left: Vec<_> = y
        .labels(y_axis.format)
        .map(|(t, label)| (chart.backend_coord(&(x_range.start, t)), label))
        .collect();
    draw_ticks(canvas, y_axis, Side::Left, &left)?;

    for (k, (idx, trace)) in boxes.iter().enumerate() {
        let s = &trace.stats;
        if s.count == 0 {
            continue;
        }
        let color = palette_color(*idx);
        let x = k as f64;
        let px = |vx: f64, vy: f64| chart.backend_coord(&(vx, vy));

        let top_left = px(x - BOX_HALF_WIDTH, s.q3);
        let bottom_right = px(x + BOX_HALF_WIDTH, s.q1);
        canvas
            .draw(&Rectangle::new([top_left, bottom_right], color.mix(0.35).filled()))
            .map_err(render_err)?;
        canvas
            .draw(&Rectangle::new([top_left, bottom_right], color.stroke_width(2)))
            .map_err(render_err)?;

        let stroke = color.stroke_width(2);
        let lines = [
            // median
            (px(x - BOX_HALF_WIDTH, s.median), px(x + BOX_HALF_WIDTH, s.median)),
            // whiskers
            (px(x, s.q3), px(x, s.upper_whisker)),
            (px(x, s.q1), px(x, s.lower_whisker)),
            (px(x - WHISKER_CAP, s.upper_whisker), px(x + WHISKER_CAP, s.upper_whisker)),
            (px(x - WHISKER_CAP, s.lower_whisker), px(x + WHISKER_CAP, s.lower_whisker)),
        ];
        for (a, b) in lines {
            canvas
                .draw(&PathElement::new(vec![a, b], stroke))
                .map_err(render_err)?;
        }

        for &v in &s.outliers {
            canvas
                .draw(&Circle::new(px(x, v), 3, color.stroke_width(1)))
                .map_err(render_err)?;
        }
    }
    Ok(())
}
