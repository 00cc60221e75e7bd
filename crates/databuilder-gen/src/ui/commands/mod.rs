pub mod generate;
pub mod list;

use std::path::Path;

use anyhow::Context;
use databuilder_host::HostDump;
pub use generate::{GenerateConfig, generate_code};
pub use list::{list_declarations, list_fields};

/// Reads and parses a host dump, naming the file and JSON path on failure.
pub async fn load_dump(path: &Path) -> anyhow::Result<HostDump> {
  let bytes = tokio::fs::read(path)
    .await
    .with_context(|| format!("failed to read host dump {}", path.display()))?;
  HostDump::from_json_slice(&bytes).with_context(|| format!("failed to parse host dump {}", path.display()))
}
