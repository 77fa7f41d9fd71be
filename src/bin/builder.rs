//! Builder pattern demo.

use design_patterns::creational::builder;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(builder::run)?;
    Ok(())
}
