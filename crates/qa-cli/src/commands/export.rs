use std::path::{Path, PathBuf};

use anyhow::Context;
use qa_core::export::{export_file_name, to_csv};
use qa_core::responses::ExportResponse;
use qa_core::timestamp::now;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    destination: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let path = destination.map_or_else(
        || ctx.config.export.dir.join(export_file_name(now())),
        PathBuf::from,
    );
    let response = export_to(&path, ctx).await?;
    output(&response, flags.format)
}

/// Write the current listing to `path` as CSV, creating parent directories.
async fn export_to(path: &Path, ctx: &AppContext) -> anyhow::Result<ExportResponse> {
    let records = ctx.db.list_all().await?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create export directory {}", parent.display()))?;
    }
    std::fs::write(path, to_csv(&records))
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = records.len(), "export written");

    Ok(ExportResponse {
        path: path.display().to_string(),
        rows: u64::try_from(records.len())?,
    })
}
