/// Words Helper - a small web service that turns an English word into a
/// Bengali translation plus synonym/antonym lists by prompting an LLM
/// completion API and pattern-matching the reply.
///
/// # Architecture
///
/// - `ai::client` dispatches prompts to the Groq chat-completion endpoint
///   with a bounded retry policy (exponential backoff on 429, fixed 1s
///   otherwise, 3 attempts total)
/// - `ai::extract` turns the model's free-text reply into structured fields,
///   degrading to placeholders when a label is missing
/// - `api::handler` exposes the JSON endpoints and serves the browser page;
///   dispatcher failures surface as placeholder payloads, never as non-200
///   statuses
///
/// Requests are independent and stateless server-side: the only shared state
/// is the read-only configuration and the completion client built from it.
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;

pub use errors::ServiceError;

/// Configure structured logging. `RUST_LOG` controls the filter; defaults to
/// `info` for this crate.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("words_helper=info,tower_http=info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
