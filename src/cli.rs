use std::path::PathBuf;

use clap::Parser;

use crate::form::SearchMode;

/// Search flights, hotels and car rentals from the terminal
#[derive(Debug, Parser)]
#[command(name = "tripseek", version, about)]
pub struct Args {
    /// Search form to open with
    #[arg(short, long, value_enum, default_value_t = SearchMode::Flights)]
    pub mode: SearchMode,

    /// JSON place catalog replacing the built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Config file (default: ~/.config/tripseek/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
