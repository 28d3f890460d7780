use std::path::PathBuf;

/// Complaints service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ComplaintsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `COMPLAINTS_PORT`.
    pub complaints_port: u16,
    /// Root directory of the attachment blob store (default
    /// `./data/attachments`). Env var: `ATTACHMENTS_DIR`.
    pub attachments_dir: PathBuf,
}

impl ComplaintsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            complaints_port: std::env::var("COMPLAINTS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            attachments_dir: std::env::var("ATTACHMENTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/attachments")),
        }
    }
}
