//! Output sink shared by every demo.
//!
//! Demos never print directly; they write to a `&mut dyn Write` so the
//! same code drives stdout in the executables and an in-memory buffer in
//! tests.

use std::io::{self, Write};

use crate::error::Result;

/// Runs `demo` against an in-memory buffer and returns what it wrote.
pub fn capture<F>(demo: F) -> Result<String>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let mut buffer: Vec<u8> = Vec::new();
    demo(&mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
}

/// Runs `demo` against a locked stdout. Used by the per-pattern executables.
pub fn run_on_stdout<F>(demo: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    demo(&mut handle)?;
    handle.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    #[test]
    fn test_capture_collects_lines() {
        let text = capture(|out| {
            writeln!(out, "first")?;
            writeln!(out, "second")?;
            Ok(())
        })
        .unwrap();
        assert_eq!(text, "first\nsecond\n");
    }

    #[test]
    fn test_capture_propagates_errors() {
        let result = capture(|_| Err(PatternError::NoCommand));
        assert!(matches!(result, Err(PatternError::NoCommand)));
    }
}
