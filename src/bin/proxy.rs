//! Proxy pattern demo.

use design_patterns::structural::proxy;
use design_patterns::{console, logging};

fn main() -> anyhow::Result<()> {
    logging::init(false, None);
    console::run_on_stdout(proxy::run)?;
    Ok(())
}
