//! Factory Method pattern demo.

use design_patterns::creational::factory;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(factory::run)?;
    Ok(())
}
