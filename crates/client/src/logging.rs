//! Tracing subscriber setup.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

pub const LOG_FILE_NAME: &str = "arena.log";

/// Setup logging to stderr and, when a log directory is configured, to a
/// per-session file.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole run.
pub fn setup_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard, session_log_dir) = match &config.log_dir {
        Some(log_dir) => {
            let session_log_dir = session_log_dir(log_dir, config.session_id.as_deref());
            std::fs::create_dir_all(&session_log_dir).with_context(|| {
                format!(
                    "Failed to create log directory {}",
                    session_log_dir.display()
                )
            })?;

            let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);

            (Some(layer), Some(guard), Some(session_log_dir))
        }
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    if let Some(dir) = session_log_dir {
        tracing::info!("Log file: {}/{}", dir.display(), LOG_FILE_NAME);
    }

    Ok(guard)
}

/// Resolves `<log_dir>/<session_id>`, inventing a timestamped id when none is given.
pub fn session_log_dir(log_dir: &Path, session_id: Option<&str>) -> PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};

    let session_id = match session_id {
        Some(id) => id.to_owned(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{}", timestamp)
        }
    };

    log_dir.join(session_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_session_id_names_the_directory() {
        assert_eq!(
            session_log_dir(Path::new("/var/log/arena"), Some("nightly")),
            PathBuf::from("/var/log/arena/nightly")
        );
    }

    #[test]
    fn missing_session_id_gets_a_timestamp() {
        let dir = session_log_dir(Path::new("logs"), None);
        let name = dir.file_name().unwrap().to_string_lossy().into_owned();

        assert!(name.starts_with("session_"), "{name}");
        assert!(dir.starts_with("logs"));
    }
}
