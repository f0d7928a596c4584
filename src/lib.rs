//! Startup environment validation for Neopilot.
//!
//! Selects one of four backend providers from `NEOPILOT_USE_*` flags and
//! checks that the variables that provider needs are present.
//!
//! ```ignore
//! use neopilot_env::{validate, EnvSnapshot, ValidationResult};
//!
//! let env = EnvSnapshot::from_process();
//! if let ValidationResult::Invalid(violations) = validate(&env) {
//!     for v in &violations {
//!         eprintln!("{}", v);
//!     }
//! }
//! ```

pub mod cli;
pub mod command;
pub mod env;
pub mod provider;
pub mod report;
pub mod startup;
pub mod validate;

pub use env::EnvSnapshot;
pub use provider::{Provider, ProviderFlags};
pub use validate::{
    ensure_valid, validate, validate_environment_variables, EnvironmentValidationError,
    ValidationResult, Violation,
};
