use dirs::home_dir;
use std::{env, path::PathBuf, sync::Once};

const DEFAULT_DIR_NAME: &str = ".savings_core";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` directives are honoured; `savings_core=info` is appended so the
/// crate stays visible when no filter is configured.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "savings_core=info".parse() {
            filter = filter.add_directive(directive);
        }

        // A host application may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.savings_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SAVINGS_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the preferences file inside `base`.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_under_base() {
        let base = PathBuf::from("/tmp/savings");
        assert_eq!(config_file_in(&base), base.join("config.json"));
    }

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
