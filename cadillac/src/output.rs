//! Export file output.

use cadillac_core::{CadillacError, Result};
use std::path::Path;

/// Writes `document` to `path`, creating missing parent directories and
/// replacing any previous export.
pub async fn write_export(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| CadillacError::file_write(path, e))?;
    }

    tokio::fs::write(path, document)
        .await
        .map_err(|e| CadillacError::file_write(path, e))?;

    tracing::debug!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}
