use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub s3_bucket: String,
    /// Endpoint override for MinIO in local dev; `None` means real AWS.
    pub s3_endpoint: Option<String>,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub aws_region: String,
    /// S3 key of the base LaTeX template.
    pub template_key: String,
    /// S3 key the assembled (marker-substituted) template is staged at.
    pub staging_key: String,
    /// S3 prefix under which generated PDFs are published.
    pub output_prefix: String,
    /// Compiler binary invoked on the assembled document.
    pub latex_binary: String,
    /// Ceiling on a single compiler invocation, in seconds.
    pub latex_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: std::env::var("S3_ENDPOINT").ok(),
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            aws_region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            template_key: std::env::var("TEMPLATE_KEY")
                .unwrap_or_else(|_| "latex_templates/base_template.tex".to_string()),
            staging_key: std::env::var("STAGING_KEY")
                .unwrap_or_else(|_| "latex_templates/updated_template.tex".to_string()),
            output_prefix: std::env::var("OUTPUT_PREFIX")
                .unwrap_or_else(|_| "media-resume/output".to_string()),
            latex_binary: std::env::var("LATEX_BINARY")
                .unwrap_or_else(|_| "pdflatex".to_string()),
            latex_timeout_secs: std::env::var("LATEX_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("LATEX_TIMEOUT_SECS must be a number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
