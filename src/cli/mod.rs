//! One-shot command line mode.

mod context;
mod flags;
pub mod prompts;
mod quiet;

use std::process::ExitCode;

pub use context::{Context, save_defaults};
pub use flags::CliFlags;
pub use quiet::is_interactive;

pub fn run(flags: CliFlags) -> ExitCode {
    quiet::set(flags.quiet);
    Context::new(flags).run()
}
