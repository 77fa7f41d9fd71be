//! Flyweight pattern demo.

use design_patterns::structural::flyweight;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(flyweight::run)?;
    Ok(())
}
