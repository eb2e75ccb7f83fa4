//! Configuration snapshot of the Heroku-style Kafka environment.
//!
//! The environment is read exactly once at startup into a [`Config`]
//! value; every other module receives it explicitly instead of reaching
//! for ambient process state.

use std::env;
use std::path::PathBuf;

/// Default kafkacat location when `KAFKACAT_BIN` is unset.
pub const DEFAULT_KAFKACAT_BIN: &str = "/usr/bin/kafkacat";

/// How credential values arrive in the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialTransport {
    /// Values are base64-encoded text, possibly wrapped in quotes by the
    /// configuration system that delivered them (systemd units, etc.).
    Encoded,
    /// Values are verbatim PEM bytes. Heroku injects credentials this way,
    /// unencoded and unquoted.
    Raw,
}

/// Everything kafkacat-hk reads from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the kafkacat binary to exec.
    pub kafkacat_bin: PathBuf,
    /// Whether credential values are raw PEM or base64 text.
    pub transport: CredentialTransport,
    /// `KAFKA_TRUSTED_CERT` — CA certificate.
    pub trusted_cert: Option<String>,
    /// `KAFKA_CLIENT_CERT` — client certificate.
    pub client_cert: Option<String>,
    /// `KAFKA_CLIENT_CERT_KEY` — client private key.
    pub client_cert_key: Option<String>,
    /// `KAFKA_URL` — broker list with `kafka://` scheme prefixes.
    pub broker_url: Option<String>,
}

impl Config {
    /// Snapshot the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Lets tests supply values without mutating process-global state.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let transport = if non_empty("HEROKU").is_some() {
            CredentialTransport::Raw
        } else {
            CredentialTransport::Encoded
        };

        Self {
            kafkacat_bin: non_empty("KAFKACAT_BIN")
                .map_or_else(|| PathBuf::from(DEFAULT_KAFKACAT_BIN), PathBuf::from),
            transport,
            trusted_cert: lookup("KAFKA_TRUSTED_CERT"),
            client_cert: lookup("KAFKA_CLIENT_CERT"),
            client_cert_key: lookup("KAFKA_CLIENT_CERT_KEY"),
            broker_url: non_empty("KAFKA_URL"),
        }
    }
}
