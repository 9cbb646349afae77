//! Command line arguments for the `ezplot` binary.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "ezplot",
    version,
    about = "Scatter and box plots from CSV files"
)]
pub struct Cli {
    /// JSON file overriding appearance settings
    #[arg(long, global = true, value_name = "FILE")]
    pub appearance: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scatter plot from x/y column pairs
    Scatter(ScatterArgs),
    /// Box plot, one box per column
    Box(BoxArgs),
}

/// Options shared by every plot command.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output file; format follows the extension (svg, png, json)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Plot title
    #[arg(short, long)]
    pub title: Option<String>,

    /// X axis title
    #[arg(long)]
    pub x_title: Option<String>,

    /// Y axis title
    #[arg(long)]
    pub y_title: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

/// `ezplot scatter …`
#[derive(Args, Debug)]
pub struct ScatterArgs {
    /// CSV path
    #[arg(value_name = "CSV")]
    pub file: PathBuf,

    /// Columns read as x1,y1,x2,y2,… (all numeric columns if omitted)
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Subplot rows
    #[arg(long, default_value_t = 1)]
    pub rows: usize,

    /// Subplot columns
    #[arg(long, default_value_t = 1)]
    pub cols: usize,

    /// Per-cell secondary y axis flags, row-major
    #[arg(long, value_delimiter = ',')]
    pub secondary: Vec<bool>,

    /// Legend name for each trace
    #[arg(long, value_delimiter = ',')]
    pub names: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// `ezplot box …`
#[derive(Args, Debug)]
pub struct BoxArgs {
    /// CSV path
    #[arg(value_name = "CSV")]
    pub file: PathBuf,

    /// Columns to plot (all numeric columns if omitted)
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

impl OutputFormat {
    /// Pick the format from the file extension; anything unrecognised is `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scatter_lists() {
        let cli = Cli::parse_from([
            "ezplot",
            "scatter",
            "data.csv",
            "--columns",
            "a,b,c,d",
            "--cols",
            "2",
            "--secondary",
            "true,false",
            "--names",
            "first,second",
            "-o",
            "out.svg",
        ]);
        let Command::Scatter(args) = cli.cmd else {
            panic!("expected scatter");
        };
        assert_eq!(args.columns, ["a", "b", "c", "d"]);
        assert_eq!(args.rows, 1);
        assert_eq!(args.cols, 2);
        assert_eq!(args.secondary, [true, false]);
        assert_eq!(args.names, ["first", "second"]);
        assert!(cli.appearance.is_none());
    }

    #[test]
    fn appearance_is_global() {
        let cli = Cli::parse_from([
            "ezplot",
            "box",
            "data.csv",
            "-o",
            "out.png",
            "--appearance",
            "style.json",
        ]);
        assert_eq!(cli.appearance, Some(PathBuf::from("style.json")));
        assert!(matches!(cli.cmd, Command::Box(ref args) if args.columns.is_empty()));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a.SVG")), Some(OutputFormat::Svg));
        assert_eq!(OutputFormat::from_path(Path::new("a.png")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("a.json")), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_path(Path::new("a.pdf")), None);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), None);
    }
}
