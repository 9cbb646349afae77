//! Default formatting shared by all plot kinds.

use super::model::{Axis, Figure};
use crate::style::AppearanceSettings;

fn styled_axis(title: &str, settings: &AppearanceSettings) -> Axis {
    Axis {
        title: title.to_string(),
        title_font_size: settings.title_font_size,
        title_font_family: settings.title_font_family.clone(),
        ticks: settings.ticks,
        color: settings.color.clone(),
        gridcolor: settings.gridcolor.clone(),
        griddash: settings.griddash,
        linecolor: settings.linecolor.clone(),
        linewidth: settings.linewidth,
        exponentformat: settings.exponentformat,
    }
}

/// Title and style the x axes of every subplot.
pub fn format_x_axis(fig: &mut Figure, title: &str, settings: &AppearanceSettings) {
    fig.layout.xaxis = styled_axis(title, settings);
}

/// Title and style the y axes of every subplot, secondary axes included.
pub fn format_y_axis(fig: &mut Figure, title: &str, settings: &AppearanceSettings) {
    fig.layout.yaxis = styled_axis(title, settings);
}

/// Plot title, backgrounds and legend.
pub fn format_layout(fig: &mut Figure, title: &str, settings: &AppearanceSettings) {
    let layout = &mut fig.layout;
    layout.title = title.to_string();
    layout.showlegend = settings.showlegend;
    layout.plot_bgcolor = settings.plot_bgcolor.clone();
    layout.paper_bgcolor = settings.paper_bgcolor.clone();
    layout.legend = settings.legend.clone();
}

/// Apply all three formatting passes.
pub fn apply_default_formatting(
    fig: &mut Figure,
    titles: &Titles,
    settings: &AppearanceSettings,
) {
    format_x_axis(fig, &titles.x, settings);
    format_y_axis(fig, &titles.y, settings);
    format_layout(fig, &titles.plot, settings);
}

/// Plot and axis titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Titles {
    pub plot: String,
    pub x: String,
    pub y: String,
}

impl Titles {
    pub fn new(plot: impl Into<String>, x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            plot: plot.into(),
            x: x.into(),
            y: y.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::SubplotGrid;
    use crate::style::{ExponentFormat, GridDash, TickPlacement};

    #[test]
    fn axes_take_every_style_constant() {
        let settings = AppearanceSettings::default();
        let mut fig = Figure::new(SubplotGrid::single());
        format_x_axis(&mut fig, "Time", &settings);
        format_y_axis(&mut fig, "Value", &settings);

        let x = &fig.layout.xaxis;
        assert_eq!(x.title, "Time");
        assert_eq!(x.title_font_size, 17);
        assert_eq!(x.title_font_family, "calibri");
        assert_eq!(x.ticks, TickPlacement::Outside);
        assert_eq!(x.color, "#2F4F4F");
        assert_eq!(x.gridcolor, "lightgray");
        assert_eq!(x.griddash, GridDash::Dot);
        assert_eq!(x.linecolor, "#2F4F4F");
        assert_eq!(x.linewidth, 2);
        assert_eq!(x.exponentformat, ExponentFormat::None);
        assert_eq!(fig.layout.yaxis.title, "Value");
    }

    #[test]
    fn layout_takes_backgrounds_and_legend() {
        let mut settings = AppearanceSettings::default();
        settings.showlegend = false;
        let mut fig = Figure::new(SubplotGrid::single());
        apply_default_formatting(&mut fig, &Titles::new("Plot", "X", "Y"), &settings);

        assert_eq!(fig.layout.title, "Plot");
        assert!(!fig.layout.showlegend);
        assert_eq!(fig.layout.plot_bgcolor, "Whitesmoke");
        assert_eq!(fig.layout.paper_bgcolor, "#FFF5EE");
        assert_eq!(fig.layout.legend, settings.legend);
    }
}
