//! External LaTeX compiler invocation.
//!
//! The compiler runs non-interactively inside the caller's working directory
//! on a collision-resistant filename (random id + timestamp), so concurrent
//! invocations sharing a filesystem never collide. Success requires BOTH a
//! zero exit status and the artifact present on disk. Byproducts
//! (`.tex/.pdf/.aux/.log`) are removed on every path; cleanup failures are
//! swallowed.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use chrono::Utc;
use tokio::process::Command;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::RenderError;

/// Compiles `source` to PDF bytes inside `workdir`.
///
/// `binary` is resolved through PATH (default `pdflatex`). The invocation is
/// bounded by `timeout`; an overrun kills the process and reports a compiler
/// failure with whatever diagnostics were captured up to that point.
pub async fn compile_to_pdf(
    source: &str,
    workdir: &Path,
    binary: &str,
    timeout: Duration,
) -> Result<Vec<u8>, RenderError> {
    let unique_id = Uuid::new_v4().simple().to_string();
    let stem = format!("resume_{}_{}", &unique_id[..8], Utc::now().timestamp());
    let tex_name = format!("{stem}.tex");

    tokio::fs::write(workdir.join(&tex_name), source).await?;

    let outcome = run_compiler(binary, &tex_name, workdir, timeout).await;
    let result = match outcome {
        Err(e) => Err(e),
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

            if !output.status.success() {
                warn!("{binary} exited with {}; stderr: {stderr}", output.status);
                Err(RenderError::Compiler {
                    detail: format!("{binary} exited with {}", output.status),
                    stdout,
                    stderr,
                })
            } else {
                // Exit code 0 alone is not proof of success.
                let pdf_path = workdir.join(format!("{stem}.pdf"));
                if !pdf_path.exists() {
                    warn!("{binary} exited cleanly but {} is missing", pdf_path.display());
                    Err(RenderError::MissingArtifact { path: pdf_path })
                } else {
                    let bytes = std::fs::read(&pdf_path)?;
                    info!("Compiled {} ({} bytes)", pdf_path.display(), bytes.len());
                    Ok(bytes)
                }
            }
        }
    };

    cleanup_byproducts(workdir, &stem);
    result
}

async fn run_compiler(
    binary: &str,
    tex_name: &str,
    workdir: &Path,
    timeout: Duration,
) -> Result<std::process::Output, RenderError> {
    let child = Command::new(binary)
        .arg("-interaction=nonstopmode")
        .arg(tex_name)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| RenderError::Compiler {
            detail: format!("failed to spawn '{binary}': {e}"),
            stdout: String::new(),
            stderr: String::new(),
        })?;

    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(RenderError::Compiler {
            detail: format!("failed to wait on '{binary}': {e}"),
            stdout: String::new(),
            stderr: String::new(),
        }),
        Err(_) => Err(RenderError::Compiler {
            detail: format!("'{binary}' timed out after {}s", timeout.as_secs()),
            stdout: String::new(),
            stderr: String::new(),
        }),
    }
}

/// Best-effort removal of the generated source, artifact, and auxiliary
/// files sharing the invocation's stem. Never raises.
fn cleanup_byproducts(workdir: &Path, stem: &str) {
    for extension in ["tex", "pdf", "aux", "log"] {
        let _ = std::fs::remove_file(workdir.join(format!("{stem}.{extension}")));
    }
}
