use std::path::PathBuf;

use clap::Parser;
use mathdrop_engine::GameSeed;

use crate::logging;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Seed for shapes, colors and challenges (32 hex digits)
    #[clap(long)]
    seed: Option<GameSeed>,
    /// Append logs to this file (filter with `RUST_LOG`, default `info`)
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Do not draw a dot in empty cells
    #[clap(long, default_value_t = false)]
    no_dots: bool,
}

pub fn run() -> anyhow::Result<()> {
    let CommandArgs {
        seed,
        log_file,
        no_dots,
    } = CommandArgs::parse();

    if let Some(path) = &log_file {
        logging::init(path)?;
    }

    play::run(&play::PlayArg {
        seed,
        show_dots: !no_dots,
    })
}
