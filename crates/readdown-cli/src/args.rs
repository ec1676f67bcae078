use clap::Parser;
use std::path::PathBuf;

/// A render request from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "readdown", version, about = "Render a Markdown file as HTML", long_about = None)]
pub struct Args {
    /// Markdown file to render
    pub input: PathBuf,

    /// Write here instead of stdout
    pub output: Option<PathBuf>,

    /// Skip the page template and print only the rendered fragment
    #[arg(long)]
    pub fragment: bool,

    /// Page title, defaults to the input file stem
    #[arg(long)]
    pub title: Option<String>,
}
