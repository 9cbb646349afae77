//! Legend box drawn beside the plot grid.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{draw_marker, render_err, resolve};
use crate::error::PlotResult;
use crate::figure::{Figure, Trace};
use crate::style::color::trace_color;
use crate::style::{LegendSettings, MarkerSymbol, Rgb};

/// Width reserved for the legend, in pixels.
pub const LEGEND_WIDTH: u32 = 180;

const PADDING: i32 = 10;
const SAMPLE_WIDTH: i32 = 20;

/// What the sample next to a legend label looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Marker(MarkerSymbol),
    Line,
    Swatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
    pub glyph: Glyph,
}

/// One entry per trace, colored like the trace.
pub fn legend_entries(fig: &Figure) -> Vec<LegendEntry> {
    fig.traces
        .iter()
        .enumerate()
        .map(|(idx, trace)| {
            let glyph = match trace {
                Trace::Scatter(s) if s.mode.draws_markers() => Glyph::Marker(s.marker.symbol),
                Trace::Scatter(_) => Glyph::Line,
                Trace::Box(_) => Glyph::Swatch,
            };
            LegendEntry {
                label: trace.name().to_string(),
                color: trace_color(idx),
                glyph,
            }
        })
        .collect()
}

/// Height of the legend box for `entries` rows plus the title row.
pub fn legend_height(settings: &LegendSettings, entries: usize) -> i32 {
    let rows = entries as i32 + i32::from(!settings.title.is_empty());
    2 * PADDING + rows * row_height(settings)
}

fn row_height(settings: &LegendSettings) -> i32 {
    settings.font_size as i32 + 8
}

pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    settings: &LegendSettings,
    font_family: &str,
    entries: &[LegendEntry],
) -> PlotResult<()> {
    let bg = resolve(&settings.bgcolor)?;
    let border = resolve(&settings.bordercolor)?;
    let font_color = resolve(&settings.font_color)?;
    let font_size = f64::from(settings.font_size);

    let (width, _) = area.dim_in_pixel();
    let top_left = (PADDING, 4 * PADDING);
    let bottom_right = (
        width as i32 - PADDING,
        top_left.1 + legend_height(settings, entries.len()),
    );

    area.draw(&Rectangle::new([top_left, bottom_right], bg.filled()))
        .map_err(render_err)?;
    if settings.borderwidth > 0 {
        area.draw(&Rectangle::new(
            [top_left, bottom_right],
            border.stroke_width(settings.borderwidth),
        ))
        .map_err(render_err)?;
    }

    let row_h = row_height(settings);
    let mut y = top_left.1 + PADDING;
    let x = top_left.0 + PADDING;

    if !settings.title.is_empty() {
        let title_style =
            FontDesc::new(FontFamily::Name(font_family), font_size, FontStyle::Bold)
                .color(&font_color);
        area.draw_text(&settings.title, &title_style, (x, y))
            .map_err(render_err)?;
        y += row_h;
    }

    let label_style = (font_family, font_size).into_font().color(&font_color);
    for entry in entries {
        let color = RGBColor(entry.color.0, entry.color.1, entry.color.2);
        let center = (x + SAMPLE_WIDTH / 2, y + row_h / 2 - 4);
        match entry.glyph {
            Glyph::Marker(symbol) => draw_marker(area, center, symbol, 8, color)?,
            Glyph::Line => area
                .draw(&PathElement::new(
                    vec![(x, center.1), (x + SAMPLE_WIDTH, center.1)],
                    color.stroke_width(2),
                ))
                .map_err(render_err)?,
            Glyph::Swatch => area
                .draw(&Rectangle::new(
                    [(x + 4, center.1 - 5), (x + SAMPLE_WIDTH - 4, center.1 + 5)],
                    color.mix(0.5).filled(),
                ))
                .map_err(render_err)?,
        }
        area.draw_text(&entry.label, &label_style, (x + SAMPLE_WIDTH + 6, y))
            .map_err(render_err)?;
        y += row_h;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{scatter_2d, ScatterOptions};
    use crate::data::XyData;
    use crate::style::{AppearanceSettings, ScatterMode};

    #[test]
    fn entries_follow_traces() {
        let data = XyData::new(vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]]);
        let mut settings = AppearanceSettings::default();
        let fig = scatter_2d(&data, &ScatterOptions::new(1, 1).names(["a", "b"]), &settings).unwrap();
        let entries = legend_entries(&fig);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "a");
        assert_eq!(entries[0].glyph, Glyph::Marker(MarkerSymbol::Circle));
        assert_ne!(entries[0].color, entries[1].color);

        settings.mode = ScatterMode::Lines;
        let fig = scatter_2d(&data, &ScatterOptions::new(1, 1).names(["a", "b"]), &settings).unwrap();
        assert_eq!(legend_entries(&fig)[1].glyph, Glyph::Line);
    }

    #[test]
    fn height_counts_title_row() {
        let mut settings = LegendSettings::default();
        assert_eq!(legend_height(&settings, 2), 2 * PADDING + 3 * 20);
        settings.title.clear();
        assert_eq!(legend_height(&settings, 2), 2 * PADDING + 2 * 20);
    }
}
