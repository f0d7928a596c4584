use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Neopilot environment check - validate provider selection before startup
#[derive(Parser)]
#[command(name = "neopilot-env")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate provider selection and credentials (default)
    Check {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Print a JSON report instead of human-readable output
        #[arg(long)]
        json: bool,
    },
    /// Show which provider the environment selects
    Provider {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },
}

/// Where the environment snapshot comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SnapshotArgs {
    /// Dotenv-style file layered over the process environment
    #[arg(long, env = "NEOPILOT_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Ignore the process environment (only read --env-file)
    #[arg(long, requires = "env_file")]
    pub no_process_env: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["neopilot-env", "check", "--json", "--env-file", "a.env"]).unwrap();
        match cli.command {
            Some(Commands::Check { snapshot, json }) => {
                assert!(json);
                assert_eq!(snapshot.env_file, Some(PathBuf::from("a.env")));
                assert!(!snapshot.no_process_env);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_no_process_env_requires_file() {
        assert!(Cli::try_parse_from(["neopilot-env", "provider", "--no-process-env"]).is_err());
    }
}
