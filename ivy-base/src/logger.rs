use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Installs a hierarchical `tracing` subscriber.
///
/// The `RUST_LOG` environment variable takes precedence over `max_level`.
pub struct Logger {
    ///  include the file:line of the log call
    pub show_location: bool,
    /// Maximum log level visible when `RUST_LOG` is not set
    pub max_level: LevelFilter,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            show_location: true,
            max_level: LevelFilter::DEBUG,
        }
    }
}

impl Logger {
    /// Installs the logger as the global default subscriber.
    ///
    /// Fails if a global subscriber has already been set.
    pub fn install(self) -> anyhow::Result<()> {
        let filter = EnvFilter::builder()
            .with_default_directive(self.max_level.into())
            .from_env_lossy();

        registry()
            .with(filter)
            .with(
                HierarchicalLayer::default()
                    .with_indent_lines(true)
                    .with_targets(self.show_location),
            )
            .try_init()?;

        Ok(())
    }
}
