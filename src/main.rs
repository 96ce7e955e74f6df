mod args;
mod auth;
mod config;
mod logging;
mod session;
mod storage;
mod store;
mod ui;

use clap::Parser;

use crate::args::Args;
use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);
    config.validate()?;

    ui::runtime::run(config)
}
