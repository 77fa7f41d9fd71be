//! Facade pattern demo.

use design_patterns::structural::facade;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(facade::run)?;
    Ok(())
}
