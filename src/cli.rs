//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap.

use clap::Parser;
use std::path::PathBuf;

/// Convert an icon-style SVG document into a WPF XAML DrawingImage resource
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Input SVG file
    pub input: PathBuf,

    /// Output file path (default: input path with the configured extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Explicit resource key (skips the uniqueness suffix)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Config file name (default: svg2xaml.toml)
    #[arg(short = 'C', long, default_value = "svg2xaml.toml")]
    pub config: PathBuf,

    /// Print the converted XAML to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Also print the reformatted source SVG
    #[arg(long)]
    pub print_source: bool,
}
