//! Interpreter pattern demo.

use design_patterns::behavioral::interpreter;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(interpreter::run)?;
    Ok(())
}
