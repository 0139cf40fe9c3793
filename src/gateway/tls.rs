//! TLS certificate loading for the public listener.

use std::io;
use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

use crate::config::TlsConfig;
use crate::gateway::StartupError;

/// Load the rustls configuration from the configured PEM pair.
///
/// Missing files are reported by role before the PEM parser runs, so the
/// operator sees which path is wrong instead of a generic parse failure.
pub async fn load_tls(tls: &TlsConfig) -> Result<RustlsConfig, StartupError> {
    check_exists("certificate", &tls.cert_path)?;
    check_exists("private key", &tls.key_path)?;

    RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
        .await
        .map_err(|source| StartupError::Tls { source })
}

fn check_exists(role: &str, path: &Path) -> Result<(), StartupError> {
    if path.exists() {
        Ok(())
    } else {
        Err(StartupError::Tls {
            source: io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} file not found: {}", role, path.display()),
            ),
        })
    }
}
