use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "course_catalog=info";

/// Installs the stderr subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(error) = result {
        eprintln!("Logging already initialised: {error}");
    }
}
