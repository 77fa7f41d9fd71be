//! Command pattern demo.

use design_patterns::behavioral::command;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(command::run)?;
    Ok(())
}
