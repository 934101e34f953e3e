use clap::Args;

/// Logging options
#[derive(Clone, Args)]
pub struct LogOptions {
    /// Use verbose output (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LogOptions {
    fn default_level(&self) -> tracing_subscriber::filter::LevelFilter {
        use tracing_subscriber::filter::LevelFilter;
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }

    /// Try set up the logger based on the verbosity level
    pub fn try_setup_logger(&self) {
        use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

        let filter = EnvFilter::builder()
            .with_default_directive(self.default_level().into())
            .from_env_lossy();

        let fmt_layer = fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_thread_ids(false)
            .with_thread_names(false)
            .without_time();

        Registry::default()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_verbosity_levels() {
        let level = |verbose| LogOptions { verbose }.default_level();
        assert_eq!(level(0), LevelFilter::WARN);
        assert_eq!(level(1), LevelFilter::INFO);
        assert_eq!(level(5), LevelFilter::DEBUG);
    }
}
