//! Decorator pattern demo.

use design_patterns::structural::decorator;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(decorator::run)?;
    Ok(())
}
