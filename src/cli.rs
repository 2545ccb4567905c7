use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use navbar::config::SchemeChoice;

#[derive(Parser)]
#[command(name = "navbar-render", about = "Lay out a tab bar and render it to an image")]
pub struct Cli {
    /// Nav bar config file (.ron); defaults apply when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Color preset, overriding the config's colors
    #[arg(long, value_enum)]
    pub scheme: Option<SchemeArg>,

    /// Container width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Container height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Number of generated tabs
    #[arg(long, default_value = "6")]
    pub tabs: u64,

    /// Index of the active tab
    #[arg(long, default_value = "0")]
    pub active: u64,

    /// Let the tab row run past the bar's edges
    #[arg(long)]
    pub extend: bool,

    /// Tab shape name (Rectangle or RoundedRectangle)
    #[arg(long)]
    pub shape: Option<String>,

    /// Write the rendered bar as a binary PPM
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print the recorded draw commands
    #[arg(long)]
    pub dump: bool,

    /// Write the effective config as RON
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemeArg {
    Classic,
    Slate,
}

impl From<SchemeArg> for SchemeChoice {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Classic => SchemeChoice::Classic,
            SchemeArg::Slate => SchemeChoice::Slate,
        }
    }
}
