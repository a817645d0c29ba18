//! Logging setup shared by slowOS apps.
//!
//! Output goes to stderr through `tracing-subscriber`. The filter comes
//! from `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber and the panic hook.
///
/// Safe to call more than once; later calls leave the existing
/// subscriber in place.
pub fn init(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        install_panic_hook(app_name);
    }
}

/// Report panics through tracing instead of the default stderr dump.
fn install_panic_hook(app_name: &'static str) {
    std::panic::set_hook(Box::new(move |panic_info| {
        let msg = panic_info.payload()
            .downcast_ref::<&str>().map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());

        let location = panic_info.location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        tracing::error!(app = app_name, %location, "panic: {}", msg);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init("slowcore-test");
        init("slowcore-test");
        tracing::info!("still logging");
    }
}
