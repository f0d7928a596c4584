//! Startup environment check.
//!
//! Runs once before the application does anything else:
//! - snapshot the environment
//! - validate provider selection and credentials
//! - log the outcome and hand back the selected provider
//!
//! Failure is fail-fast: the caller is expected to abort startup with the
//! aggregated report.

mod ensure;

pub use ensure::{ensure_environment, EnsureStatus, StartupCheck};
