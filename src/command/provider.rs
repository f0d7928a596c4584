use anyhow::Result;

use crate::cli::SnapshotArgs;
use crate::provider::ProviderFlags;

use super::load_snapshot;

/// Print the selected provider. Returns false when flags conflict.
pub fn run_provider(args: &SnapshotArgs) -> Result<bool> {
    let env = load_snapshot(args)?;
    let flags = ProviderFlags::from_env(&env);

    match flags.selection() {
        Some(provider) => {
            println!("{}", provider);
            if let Some(flag) = provider.flag() {
                println!("   Selected by {}=1", flag);
            }
            Ok(true)
        }
        None => {
            eprintln!("❌ {} provider flags are set; only one is allowed.", flags.count());
            Ok(false)
        }
    }
}
