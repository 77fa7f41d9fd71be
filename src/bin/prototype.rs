//! Prototype pattern demo.

use design_patterns::creational::prototype;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(prototype::run)?;
    Ok(())
}
