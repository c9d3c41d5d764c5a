use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "supz")]
#[command(about = "Interactive supplier registry for the terminal", long_about = None)]
pub struct Cli {
    /// Directory the image picker browses (defaults to the current directory)
    #[arg(short, long)]
    pub gallery: Option<PathBuf>,

    /// Image reference assigned when a supplier is added without one
    /// (overrides the configured value)
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
