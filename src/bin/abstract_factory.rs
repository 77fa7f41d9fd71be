//! Abstract Factory pattern demo.

use design_patterns::creational::abstract_factory;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(abstract_factory::run)?;
    Ok(())
}
