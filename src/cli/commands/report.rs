use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use common::{ApiRequest, Transport, report_file_name};
use tracing::{info, trace, warn};

use crate::cli::Context;

pub async fn report(ctx: &Context, output: Option<PathBuf>, out: &mut impl Write) -> Result<()> {
    trace!("Entering report command");

    let output = output
        .unwrap_or_else(|| PathBuf::from(report_file_name(&chrono::Utc::now())));

    let bytes = match ctx.client.request_report_download(ctx.session.token()).await {
        Ok(bytes) => bytes,
        Err(e) => {
            // Same request a browser navigation would make: no bearer header.
            let path = ctx.client.report_path();
            warn!("Report download failed ({}), retrying GET {}", e, path);

            let response = ctx
                .client
                .transport()
                .send(ApiRequest::get(path))
                .await?
                .error_for_status()
                .with_context(|| format!("Report download failed ({})", e))?;
            if response.is_json() {
                bail!("Report download failed ({}); the server did not return a document", e);
            }
            response.body
        }
    };

    std::fs::write(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Report saved ({} bytes)", bytes.len());
    writeln!(out, "Report saved as {}", output.display())?;
    Ok(())
}
