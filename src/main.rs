use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod terminal;
mod tui;

use cli::CliFlags;

fn main() -> ExitCode {
    let flags = CliFlags::parse();
    init_logging(flags.verbose);

    exits::install_handlers();
    exits::disable_core_dumps();

    if flags.interactive || (!flags.has_explicit_args() && cli::is_interactive()) {
        tui::run(flags);
        ExitCode::SUCCESS
    } else {
        cli::run(flags)
    }
}

/// `-v` forces debug output; otherwise `RUST_LOG` decides, defaulting to warn.
fn log_level(verbose: u8) -> Option<log::LevelFilter> {
    (verbose > 0).then_some(log::LevelFilter::Debug)
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = log_level(verbose) {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false).init();
}
