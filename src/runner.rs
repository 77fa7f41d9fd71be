use std::io::Write;

use colored::Colorize;

use crate::catalog::Pattern;
use crate::config::RunnerConfig;
use crate::error::Result;

pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    fn banner(&self, pattern: &Pattern) -> String {
        let plain = format!("=== {} ({}) ===", pattern.title, pattern.category);
        if self.config.color {
            plain.bold().cyan().to_string()
        } else {
            plain
        }
    }

    pub fn run_one(&self, pattern: &Pattern, out: &mut dyn Write) -> Result<()> {
        tracing::debug!("Running pattern {}", pattern.name);
        if self.config.banner {
            writeln!(out, "{}", self.banner(pattern))?;
        }
        pattern.run(out)
    }

    /// Runs `patterns` one after another, separated by a blank line.
    pub fn run_many(&self, patterns: &[&Pattern], out: &mut dyn Write) -> Result<()> {
        for (i, pattern) in patterns.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            self.run_one(pattern, out)?;
        }
        Ok(())
    }

    /// Runs the configured selection, or the whole catalog.
    pub fn run_selection(&self, out: &mut dyn Write) -> Result<()> {
        let selection = self.config.selection()?;
        self.run_many(&selection, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::console::capture;

    fn plain_config() -> RunnerConfig {
        RunnerConfig {
            color: false,
            ..RunnerConfig::default()
        }
    }

    #[test]
    fn test_run_one_with_banner() {
        let runner = Runner::new(plain_config());
        let pattern = catalog::find("adapter").unwrap();
        let text = capture(|out| runner.run_one(pattern, out)).unwrap();
        assert!(text.starts_with("=== Adapter (structural) ===\n"));
        assert!(text.contains("Printing: PRINT THIS IN LOWERCASE (ADAPTED)"));
    }

    #[test]
    fn test_run_one_without_banner_is_bare_transcript() {
        let runner = Runner::new(RunnerConfig {
            banner: false,
            ..plain_config()
        });
        let pattern = catalog::find("bridge").unwrap();
        let with_runner = capture(|out| runner.run_one(pattern, out)).unwrap();
        let bare = capture(|out| pattern.run(out)).unwrap();
        assert_eq!(with_runner, bare);
    }

    #[test]
    fn test_run_selection_in_configured_order() {
        let runner = Runner::new(RunnerConfig {
            patterns: vec!["memento".to_string(), "adapter".to_string()],
            ..plain_config()
        });
        let text = capture(|out| runner.run_selection(out)).unwrap();
        let memento = text.find("=== Memento").unwrap();
        let adapter = text.find("=== Adapter").unwrap();
        assert!(memento < adapter);
        assert!(text.contains("\n\n=== Adapter"));
    }
}
