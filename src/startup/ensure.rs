//! Ensure mechanism for the startup environment check.

use tracing::{debug, info};

use crate::env::EnvSnapshot;
use crate::provider::{Provider, ProviderFlags};
use crate::validate::{ensure_valid, EnvironmentValidationError};

/// State of the environment check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EnsureStatus {
    #[default]
    NotStarted,
    Success(Provider),
    Failed(usize),
}

/// Holds a snapshot and records the outcome of checking it.
///
/// # Example
/// ```ignore
/// let mut check = StartupCheck::new(EnvSnapshot::from_process());
/// let provider = check.ensure()?;
/// ```
pub struct StartupCheck {
    env: EnvSnapshot,
    status: EnsureStatus,
}

impl StartupCheck {
    pub fn new(env: EnvSnapshot) -> Self {
        Self {
            env,
            status: EnsureStatus::NotStarted,
        }
    }

    pub fn status(&self) -> &EnsureStatus {
        &self.status
    }

    /// Validate the snapshot, logging each step.
    pub fn ensure(&mut self) -> Result<Provider, EnvironmentValidationError> {
        info!("🔎 Checking environment variables...");

        let flags = ProviderFlags::from_env(&self.env);
        debug!(
            "   Provider flags: bedrock={} vertex={} foundry={}",
            flags.bedrock, flags.vertex, flags.foundry
        );

        match ensure_valid(&self.env) {
            Ok(provider) => {
                info!("✅ Environment valid, using {}", provider);
                self.status = EnsureStatus::Success(provider);
                Ok(provider)
            }
            Err(err) => {
                // The caller reports the aggregated error; only trace it here
                debug!(
                    "❌ Environment variable validation failed ({} violation(s))",
                    err.violations().len()
                );
                for violation in err.violations() {
                    debug!("   {:?}: {}", violation.rule, violation);
                }
                self.status = EnsureStatus::Failed(err.violations().len());
                Err(err)
            }
        }
    }
}

/// One-shot form of [`StartupCheck::ensure`].
pub fn ensure_environment(env: EnvSnapshot) -> Result<Provider, EnvironmentValidationError> {
    StartupCheck::new(env).ensure()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::vars;

    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn run_with_logs(level: tracing::Level, env: EnvSnapshot) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _ = StartupCheck::new(env).ensure();
        });
        logs.contents()
    }

    #[test]
    fn test_ensure_status_default() {
        assert_eq!(EnsureStatus::default(), EnsureStatus::NotStarted);
    }

    #[test]
    fn test_failure_is_quiet_at_warn_level() {
        let env = EnvSnapshot::from_pairs([(vars::USE_BEDROCK, "1")]);
        let logs = run_with_logs(tracing::Level::WARN, env);
        assert!(logs.is_empty(), "unexpected log output: {}", logs);
    }

    #[test]
    fn test_failure_details_at_debug_level() {
        let env = EnvSnapshot::from_pairs([(vars::USE_BEDROCK, "1")]);
        let logs = run_with_logs(tracing::Level::DEBUG, env);
        assert!(logs.contains("2 violation(s)"));
        assert!(logs.contains("BedrockRegion"));
        assert!(logs.contains("BedrockCredentials"));
    }

    #[test]
    fn test_startup_check_records_success() {
        let mut check = StartupCheck::new(EnvSnapshot::from_pairs([
            (vars::USE_FOUNDRY, "1"),
            (vars::FOUNDRY_BASE_URL, "https://foundry.example"),
        ]));
        assert_eq!(check.status(), &EnsureStatus::NotStarted);

        assert_eq!(check.ensure().unwrap(), Provider::Foundry);
        assert_eq!(check.status(), &EnsureStatus::Success(Provider::Foundry));
    }

    #[test]
    fn test_startup_check_records_failure() {
        let mut check = StartupCheck::new(EnvSnapshot::from_pairs([(vars::USE_VERTEX, "1")]));
        let err = check.ensure().unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert_eq!(check.status(), &EnsureStatus::Failed(2));
    }

    #[test]
    fn test_ensure_environment() {
        assert!(ensure_environment(EnvSnapshot::new()).is_err());
        assert!(ensure_environment(EnvSnapshot::from_pairs([(vars::API_KEY, "k")])).is_ok());
    }
}
