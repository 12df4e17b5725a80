//! Resume generation orchestrator.
//!
//! State machine: Draft → Rendered → Assembled → Stored → Compiled →
//! Published, failing terminally from any state. Each invocation is
//! self-contained — fresh temp dir, timestamped object keys — so concurrent
//! runs never share mutable state. No retries: every failure surfaces to the
//! caller as a single opaque failure for that invocation.

use std::path::Path;
use std::time::Duration;

use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::RenderError;
use crate::models::resume::ResumeContent;
use crate::render::compiler::compile_to_pdf;
use crate::render::sections::{
    render_education, render_experiences, render_personal_info, render_projects, render_skills,
};
use crate::render::template::{
    assemble, MARKER_EDUCATION, MARKER_EXPERIENCES, MARKER_PERSONAL_INFO, MARKER_PROJECTS,
    MARKER_SKILLS,
};
use crate::storage::ArtifactStore;

/// Per-invocation knobs, split from `Config` so tests can run the pipeline
/// without an environment.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub template_key: String,
    pub staging_key: String,
    pub output_prefix: String,
    pub latex_binary: String,
    pub compile_timeout: Duration,
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            template_key: config.template_key.clone(),
            staging_key: config.staging_key.clone(),
            output_prefix: config.output_prefix.clone(),
            latex_binary: config.latex_binary.clone(),
            compile_timeout: Duration::from_secs(config.latex_timeout_secs),
        }
    }
}

/// Runs the full pipeline and returns the published artifact URL.
///
/// Steps:
/// 1. Render all five sections into (marker, fragment) pairs.
/// 2. Fetch the base template and substitute the markers.
/// 3. Stage the assembled document in the store.
/// 4. Download it back (round trip — compile exactly what the store holds).
/// 5. Compile in an isolated temp dir.
/// 6. Publish the PDF under a timestamped key and return its URL.
pub async fn generate_pdf(
    store: &dyn ArtifactStore,
    options: &RenderOptions,
    content: &ResumeContent,
) -> Result<String, RenderError> {
    // Draft → Rendered
    info!("Rendering resume sections");
    let fragments = [
        (
            MARKER_PERSONAL_INFO,
            render_personal_info(&content.personal_info),
        ),
        (MARKER_EXPERIENCES, render_experiences(&content.experiences)),
        (MARKER_EDUCATION, render_education(&content.education)),
        (MARKER_PROJECTS, render_projects(&content.projects)),
        (MARKER_SKILLS, render_skills(&content.skills)),
    ];
    for (marker, fragment) in &fragments {
        if fragment.trim().is_empty() {
            // Blank fragments leave their marker visible in the output.
            warn!("Section '{marker}' rendered empty; marker stays in the document");
        }
    }

    // Rendered → Assembled
    let template_bytes = store.fetch(&options.template_key).await?;
    let template = String::from_utf8_lossy(&template_bytes);
    let document = assemble(&template, &fragments);
    info!("Assembled document ({} bytes)", document.len());

    // Assembled → Stored
    store
        .store(
            Bytes::from(document),
            &options.staging_key,
            "application/x-tex",
        )
        .await?;
    info!("Staged assembled document at '{}'", options.staging_key);

    // Stored → Compiled
    let staged = store.fetch(&options.staging_key).await?;
    let staged_source = String::from_utf8_lossy(&staged).into_owned();
    let workdir = tempfile::tempdir()?;
    let pdf = compile_to_pdf(
        &staged_source,
        workdir.path(),
        &options.latex_binary,
        options.compile_timeout,
    )
    .await?;

    // Compiled → Published
    let stem = Path::new(&options.staging_key)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    let key = format!(
        "{}/{}-{}.pdf",
        options.output_prefix,
        stem,
        Utc::now().timestamp()
    );
    let url = store.store(Bytes::from(pdf), &key, "application/pdf").await?;
    info!("Published artifact at {url}");

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        Description, ExperienceRecord, PersonalInfo, SkillRecord,
    };
    use crate::storage::MemoryStore;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const TEMPLATE: &str = "\\documentclass{article}\n\
        % INSERT_PERSONAL_INFO\n\
        % INSERT_EXPERIENCES\n\
        % INSERT_EDUCATION\n\
        % INSERT_PROJECTS\n\
        % INSERT_SKILLS\n";

    fn write_stub_compiler(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("stub-latex");
        std::fs::write(&path, "#!/bin/sh\nprintf '%%PDF-1.4 stub' > \"${2%.tex}.pdf\"\n")
            .unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn options(binary: &str) -> RenderOptions {
        RenderOptions {
            template_key: "latex_templates/base_template.tex".to_string(),
            staging_key: "latex_templates/updated_template.tex".to_string(),
            output_prefix: "media-resume/output".to_string(),
            latex_binary: binary.to_string(),
            compile_timeout: Duration::from_secs(5),
        }
    }

    fn sample_content() -> ResumeContent {
        ResumeContent {
            personal_info: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                number: "555-0100".to_string(),
                email: "ada@example.com".to_string(),
                portfolio: None,
                linkedin: None,
                github: None,
            },
            experiences: vec![ExperienceRecord {
                title: "Engineer".to_string(),
                organisation: "Acme".to_string(),
                location: "Remote".to_string(),
                start_date: "2022".to_string(),
                end_date: "2024".to_string(),
                descriptions: vec![Description::Text("Built X".to_string())],
                included: true,
            }],
            education: vec![],
            projects: vec![],
            skills: vec![SkillRecord {
                content: "Go".to_string(),
            }],
        }
    }

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new("resume-bucket");
        store.seed("latex_templates/base_template.tex", TEMPLATE.as_bytes());
        store
    }

    #[tokio::test]
    async fn test_pipeline_publishes_pdf_url() {
        let bin_dir = tempdir().unwrap();
        let stub = write_stub_compiler(bin_dir.path());

        let store = seeded_store();
        let url = generate_pdf(&store, &options(stub.to_str().unwrap()), &sample_content())
            .await
            .unwrap();

        assert!(url.starts_with("memory://resume-bucket/media-resume/output/"));
        assert!(url.ends_with(".pdf"));
    }

    #[tokio::test]
    async fn test_staged_document_round_trips_through_store() {
        let bin_dir = tempdir().unwrap();
        let stub = write_stub_compiler(bin_dir.path());

        let store = seeded_store();
        generate_pdf(&store, &options(stub.to_str().unwrap()), &sample_content())
            .await
            .unwrap();

        let staged = store.get("latex_templates/updated_template.tex").unwrap();
        let staged = String::from_utf8(staged.to_vec()).unwrap();
        assert!(staged.contains("Engineer"));
        assert!(staged.contains("\\item{Go}"));
        // Empty sections leave their markers visible.
        assert!(staged.contains("% INSERT_EDUCATION"));
        assert!(staged.contains("% INSERT_PROJECTS"));
        assert!(!staged.contains("% INSERT_EXPERIENCES"));
    }

    #[tokio::test]
    async fn test_missing_compiler_yields_failure() {
        let store = seeded_store();
        let result = generate_pdf(
            &store,
            &options("/nonexistent/latex-binary"),
            &sample_content(),
        )
        .await;
        assert!(matches!(result, Err(RenderError::Compiler { .. })));
    }

    #[tokio::test]
    async fn test_missing_template_yields_storage_failure() {
        let store = MemoryStore::new("resume-bucket");
        let result = generate_pdf(&store, &options("true"), &sample_content()).await;
        assert!(matches!(result, Err(RenderError::Storage(_))));
        // Nothing was staged — the pipeline never compiles an unassembled document.
        assert!(store.get("latex_templates/updated_template.tex").is_none());
    }
}
