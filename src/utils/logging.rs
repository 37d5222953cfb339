use tracing_subscriber::EnvFilter;

/// Log verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verbosity {
    Quiet,
    Normal,
    Debug,
}

impl Verbosity {
    pub(crate) fn from_flags(debug: bool, quiet: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }

    fn default_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "versecast=warn",
            Verbosity::Normal => "versecast=info",
            Verbosity::Debug => "versecast=debug",
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over the CLI flags.
pub(crate) fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_wins_over_quiet() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Debug);
    }

    #[test]
    fn quiet_maps_to_warn() {
        let v = Verbosity::from_flags(false, true);
        assert_eq!(v.default_directive(), "versecast=warn");
    }

    #[test]
    fn default_is_info() {
        let v = Verbosity::from_flags(false, false);
        assert_eq!(v.default_directive(), "versecast=info");
    }
}
