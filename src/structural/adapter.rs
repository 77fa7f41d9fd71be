// Adapter: a legacy printer that only knows uppercase, reached through the
// same `send_command` call the modern computer uses.

use std::io::Write;

use crate::error::Result;

pub trait CommandSink {
    fn send_command(&self, command: &str, out: &mut dyn Write) -> Result<()>;
}

pub struct ModernComputer;

impl CommandSink for ModernComputer {
    fn send_command(&self, command: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sending command: {command}")?;
        Ok(())
    }
}

/// The adaptee. Expects text that is already uppercase.
pub struct LegacyPrinter;

impl LegacyPrinter {
    pub fn print_in_uppercase(&self, text: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing: {text}")?;
        Ok(())
    }
}

pub struct PrinterAdapter {
    printer: LegacyPrinter,
}

impl PrinterAdapter {
    pub fn new() -> Self {
        Self {
            printer: LegacyPrinter,
        }
    }
}

impl Default for PrinterAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandSink for PrinterAdapter {
    fn send_command(&self, command: &str, out: &mut dyn Write) -> Result<()> {
        self.printer.print_in_uppercase(&command.to_uppercase(), out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let computer = ModernComputer;
    let adapter = PrinterAdapter::new();

    computer.send_command("Print this in lowercase", out)?;
    adapter.send_command("Print this in lowercase (adapted)", out)
}
