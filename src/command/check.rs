use anyhow::{Context, Result};

use crate::cli::SnapshotArgs;
use crate::report::ValidationReport;
use crate::startup::StartupCheck;

use super::load_snapshot;

/// Returns whether the environment is valid.
pub fn run_check(args: &SnapshotArgs, json: bool) -> Result<bool> {
    let env = load_snapshot(args)?;

    if json {
        let report = ValidationReport::from_env(&env);
        println!("{}", report.to_json().context("Failed to serialize report")?);
        return Ok(report.valid);
    }

    match StartupCheck::new(env).ensure() {
        Ok(provider) => {
            println!("✅ Environment valid (provider: {})", provider);
            Ok(true)
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::file_only_args;

    #[test]
    fn test_check_valid() {
        let (_file, args) = file_only_args("NEOPILOT_API_KEY=sk-test\n");
        assert!(run_check(&args, false).unwrap());
    }

    #[test]
    fn test_check_invalid() {
        let (_file, args) = file_only_args("NEOPILOT_USE_VERTEX=1\n");
        assert!(!run_check(&args, false).unwrap());
    }

    #[test]
    fn test_check_json_returns_validity() {
        let (_file, args) = file_only_args(
            "NEOPILOT_USE_BEDROCK=1\nAWS_REGION=us-east-1\nAWS_BEARER_TOKEN_BEDROCK=bearer\n",
        );
        assert!(run_check(&args, true).unwrap());

        let (_file, args) = file_only_args("NEOPILOT_USE_BEDROCK=1\n");
        assert!(!run_check(&args, true).unwrap());
    }

    #[test]
    fn test_check_conflicting_flags() {
        let (_file, args) = file_only_args(
            "NEOPILOT_USE_FOUNDRY=1\nNEOPILOT_USE_VERTEX=1\nNEOPILOT_FOUNDRY_RESOURCE=res\n",
        );
        assert!(!run_check(&args, false).unwrap());
        assert!(!run_check(&args, true).unwrap());
    }

    #[test]
    fn test_check_missing_env_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = SnapshotArgs {
            env_file: Some(dir.path().join("missing.env")),
            no_process_env: true,
        };
        assert!(run_check(&args, false).is_err());
    }
}
