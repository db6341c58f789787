//! Tracing setup, adapted from the same pattern used elsewhere in this
//! workspace: an `EnvFilter` honoring `RUST_LOG`, falling back to a
//! CLI-supplied level, feeding a pretty `fmt` layer.

use tracing::{subscriber::set_global_default, Subscriber};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Build a subscriber. `env_filter` is the fallback level used when
/// `RUST_LOG` is unset.
pub fn get_subscriber(env_filter: String) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = fmt::Layer::default().pretty();
    Registry::default().with(env_filter).with(formatting_layer)
}

/// Register `subscriber` as the process-global default. Must only be
/// called once.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("failed to install log tracer");
    set_global_default(subscriber).expect("failed to set tracing subscriber");
}
