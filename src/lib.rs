pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod paths;
pub mod serde_utils;
pub mod weather;

/// Install the ring TLS provider for outbound HTTPS.
///
/// Safe to call more than once; later calls are no-ops.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
