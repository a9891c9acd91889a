use clap::Parser;
use std::path::PathBuf;

use crate::ui::runtime::RunOptions;

/// Present a Markdown slide deck in the terminal.
#[derive(Debug, Parser)]
#[command(name = "slidedeck", version, about)]
pub struct Cli {
    /// Markdown deck; slides are separated by `---` lines
    pub deck: PathBuf,

    /// Config file (default: platform config dir/slidedeck/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Slide to open on (1-based)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub start: Option<u32>,

    /// Do not start the elapsed timer automatically
    #[arg(long)]
    pub no_timer: bool,
}

impl Cli {
    /// Session options, with `autostart` from the config as the timer default.
    pub fn run_options(&self, autostart: bool) -> RunOptions {
        RunOptions {
            start_slide: self.start.map(|n| n as usize),
            timer: autostart && !self.no_timer,
        }
    }
}
