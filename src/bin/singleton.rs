//! Singleton pattern demo.

use design_patterns::creational::singleton;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(singleton::run)?;
    Ok(())
}
