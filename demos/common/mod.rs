//! Log flags shared by the demo programs.

use tracing_subscriber::EnvFilter;

/// Log flags, flattened into a demo's own arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    /// Show draw internals (-v per squad, -vv per player)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Only report problems with the roster or the phrase book
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbosity")]
    pub quiet: bool,

    /// Emit log lines as JSON
    #[arg(long = "log-json", global = true)]
    pub json: bool,
}

impl LogArgs {
    fn level(&self) -> &'static str {
        match (self.quiet, self.verbosity) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }

    /// Install the global subscriber on stderr, leaving stdout to the report.
    /// `RUST_LOG` overrides the flags. Other crates only log warnings.
    ///
    /// # Panics
    ///
    /// Panics if a subscriber has already been set.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,squad_draw={}", self.level())));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);
        if self.json {
            builder.json().init();
        } else {
            builder.compact().init();
        }
    }
}
