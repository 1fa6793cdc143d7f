pub mod artifact;
pub mod config;
pub mod deploy;
pub mod scenario;

pub use deploy::{deploy_token, ensure_funded, verify_deployment, wait_for_code, Deployment};

/// Install the global `fmt` subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
