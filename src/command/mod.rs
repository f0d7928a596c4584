mod check;
mod provider;

pub use check::run_check;
pub use provider::run_provider;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::cli::SnapshotArgs;
use crate::env::EnvSnapshot;

/// Build the snapshot a command validates.
fn load_snapshot(args: &SnapshotArgs) -> Result<EnvSnapshot> {
    let base = if args.no_process_env {
        EnvSnapshot::new()
    } else {
        EnvSnapshot::from_process()
    };

    match &args.env_file {
        Some(path) => {
            let file = EnvSnapshot::from_env_file(path)
                .with_context(|| format!("Failed to load env file {:?}", path))?;
            if file.is_empty() {
                warn!("⚠️  Env file {:?} defines no variables", path);
            } else {
                debug!("Layering {} variables from {:?}", file.len(), path);
            }
            Ok(base.overlay(file))
        }
        None => Ok(base),
    }
}

/// Write `content` to a temp env file and point `SnapshotArgs` at it alone.
#[cfg(test)]
fn file_only_args(content: &str) -> (tempfile::NamedTempFile, SnapshotArgs) {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    let args = SnapshotArgs {
        env_file: Some(file.path().to_path_buf()),
        no_process_env: true,
    };
    (file, args)
}
