//! Mediator pattern demo.

use design_patterns::behavioral::mediator;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(mediator::run)?;
    Ok(())
}
