//! Visitor pattern demo.

use design_patterns::behavioral::visitor;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(visitor::run)?;
    Ok(())
}
