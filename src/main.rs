mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod notify;
mod output;
mod source;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    utils::set_tick_debug(cli.debug);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
