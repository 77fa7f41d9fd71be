//! Chain of Responsibility pattern demo.

use design_patterns::behavioral::chain;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(chain::run)?;
    Ok(())
}
