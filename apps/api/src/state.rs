use crate::config::Config;
use crate::generation::generator::DeliverableGenerator;

/// Shared application state injected into route handlers via Axum extractors.
///
/// Everything in here is immutable after startup: the generator holds the
/// completion-backend handle behind an `Arc`, and the config is plain data.
/// Requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub generator: DeliverableGenerator,
    pub config: Config,
}
