//! Interactive form.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use crate::cli::{CliFlags, Context};

/// Run the interactive form until the user quits.
pub fn run(flags: CliFlags) {
    let ctx = Context::interactive(flags);
    gen_form_menu(&ctx);
}
