//! Template Method pattern demo.

use design_patterns::behavioral::template;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(template::run)?;
    Ok(())
}
