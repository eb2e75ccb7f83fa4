//! Credential loading from the configuration snapshot.
//!
//! Produces the {CA, certificate, key} triple as raw PEM bytes. In
//! encoded mode the values are quote-stripped, validated as non-empty,
//! and base64-decoded; in raw (Heroku) mode they pass through verbatim.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, CredentialTransport};

/// Environment keys required in encoded mode, named in operator messages.
const REQUIRED_KEYS: &str = "KAFKA_CLIENT_CERT, KAFKA_CLIENT_CERT_KEY, KAFKA_TRUSTED_CERT";

/// Errors from credential loading. All are fatal; configuration errors
/// are operator errors, never retried.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// One or more required credential values is missing or blank.
    #[error("must set {REQUIRED_KEYS} env")]
    Missing,

    /// A credential value is not valid base64.
    #[error("failed to decode {key}: {source}")]
    Decode {
        /// The environment key whose value failed to decode.
        key: &'static str,
        /// Underlying base64 failure, surfaced verbatim.
        source: base64::DecodeError,
    },
}

/// The TLS client authentication triple.
///
/// `Debug` is redacted: pipe contents are secrets and must never reach
/// logs or panic messages.
#[derive(Clone)]
pub struct CredentialSet {
    /// CA certificate PEM bytes.
    pub ca: Vec<u8>,
    /// Client certificate PEM bytes.
    pub cert: Vec<u8>,
    /// Client private key PEM bytes.
    pub key: Vec<u8>,
}

impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSet")
            .field("ca", &format_args!("[{} bytes]", self.ca.len()))
            .field("cert", &format_args!("[{} bytes]", self.cert.len()))
            .field("key", &format_args!("[{} bytes]", self.key.len()))
            .finish()
    }
}

impl CredentialSet {
    /// Load the credential triple according to the configured transport.
    ///
    /// # Errors
    ///
    /// In encoded mode, returns [`CredentialError::Missing`] when any of
    /// the three values is absent or blank after quote-stripping, and
    /// [`CredentialError::Decode`] on malformed base64. Raw mode never
    /// fails: Heroku's own runtime guarantees the values exist.
    pub fn load(config: &Config) -> Result<Self, CredentialError> {
        match config.transport {
            CredentialTransport::Raw => {
                debug!("raw credential transport, using env values verbatim");
                Ok(Self {
                    ca: config.trusted_cert.clone().unwrap_or_default().into_bytes(),
                    cert: config.client_cert.clone().unwrap_or_default().into_bytes(),
                    key: config
                        .client_cert_key
                        .clone()
                        .unwrap_or_default()
                        .into_bytes(),
                })
            }
            CredentialTransport::Encoded => {
                let ca_b64 = strip_quotes(config.trusted_cert.as_deref().unwrap_or_default());
                let cert_b64 = strip_quotes(config.client_cert.as_deref().unwrap_or_default());
                let key_b64 = strip_quotes(config.client_cert_key.as_deref().unwrap_or_default());

                if ca_b64.is_empty() || cert_b64.is_empty() || key_b64.is_empty() {
                    return Err(CredentialError::Missing);
                }

                debug!("decoding base64 credential transport");
                Ok(Self {
                    ca: decode("KAFKA_TRUSTED_CERT", ca_b64)?,
                    cert: decode("KAFKA_CLIENT_CERT", cert_b64)?,
                    key: decode("KAFKA_CLIENT_CERT_KEY", key_b64)?,
                })
            }
        }
    }
}

fn decode(key: &'static str, value: &str) -> Result<Vec<u8>, CredentialError> {
    STANDARD
        .decode(value)
        .map_err(|source| CredentialError::Decode { key, source })
}

/// Strip at most one leading and one trailing `"` from a value.
///
/// Some configuration systems (systemd `EnvironmentFile`, for one) deliver
/// values with their quoting intact. Idempotent on unquoted input.
pub fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
