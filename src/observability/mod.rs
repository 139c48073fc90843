//! Observability infrastructure: structured logging.
//!
//! All diagnostics go through `tracing` and are written to stderr, so CSV and
//! JSON reports on stdout stay machine-readable.
//!
//! ## Usage
//!
//! ```ignore
//! use article_metrics::observability::init_logging;
//!
//! fn main() {
//!     init_logging(verbosity, quiet);
//!     // ... rest of application
//! }
//! ```

pub mod logging;

pub use logging::{init_logging, level_for_verbosity, LOG_ENV_VAR};
