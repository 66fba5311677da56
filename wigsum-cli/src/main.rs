mod summarize;

use anyhow::Result;
use clap::Command;
use log::LevelFilter;

use summarize::cli::{VERBOSE_ARG, create_summarize_cli, normalize_legacy_flags};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "wigsum";
    pub const BIN_NAME: &str = "wigsum";
}

fn build_parser() -> Command {
    create_summarize_cli()
        .name(consts::PKG_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
}

fn init_logger(verbosity: u8) {
    let filter_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // RUST_LOG still wins over the verbosity flags
    pretty_env_logger::formatted_builder()
        .filter_level(filter_level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches_from(normalize_legacy_flags(std::env::args_os()));

    init_logger(matches.get_count(VERBOSE_ARG));

    summarize::handlers::run_summarize(&matches)?;

    Ok(())
}
