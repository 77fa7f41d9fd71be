//! Memento pattern demo.

use design_patterns::behavioral::memento;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(memento::run)?;
    Ok(())
}
