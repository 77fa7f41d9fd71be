use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

pub const DEFAULT_FILTER: &str = "design_patterns=warn";
pub const VERBOSE_FILTER: &str = "design_patterns=debug";

/// Picks the filter directive: `RUST_LOG` wins, then `--verbose`, then the
/// configured filter, then [`DEFAULT_FILTER`].
pub fn filter_directive(verbose: bool, configured: Option<&str>) -> String {
    if verbose {
        VERBOSE_FILTER.to_string()
    } else {
        configured.unwrap_or(DEFAULT_FILTER).to_string()
    }
}

fn build_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, configured)))
}

/// Swaps the filter of the installed subscriber, for settings that are only
/// known after logging is already up.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    pub fn reconfigure(&self, verbose: bool, configured: Option<&str>) {
        if let Err(err) = self.filter.reload(build_filter(verbose, configured)) {
            tracing::warn!("Failed to apply log filter: {err}");
        }
    }
}

/// Installs the global subscriber. Logs go to stderr so transcripts on
/// stdout stay exact. Calling it twice is harmless; only the first call
/// returns a handle.
pub fn init(verbose: bool, configured: Option<&str>) -> Option<LogHandle> {
    let (filter, handle) = reload::Layer::new(build_filter(verbose, configured));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .ok()?;
    Some(LogHandle { filter: handle })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_defaults() {
        assert_eq!(filter_directive(false, None), DEFAULT_FILTER);
    }

    #[test]
    fn test_filter_directive_verbose_overrides_config() {
        assert_eq!(filter_directive(true, Some("info")), VERBOSE_FILTER);
    }

    #[test]
    fn test_filter_directive_uses_config() {
        assert_eq!(filter_directive(false, Some("design_patterns=info")), "design_patterns=info");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let first = init(false, None);
        let second = init(true, None);
        assert!(first.is_none() || second.is_none());
        if let Some(handle) = first.or(second) {
            handle.reconfigure(false, Some("design_patterns=info"));
        }
    }
}
