//! kafkacat-hk — kafkacat wrapper for Heroku-style Kafka environments.
//!
//! Reads `KAFKA_TRUSTED_CERT`, `KAFKA_CLIENT_CERT`, and
//! `KAFKA_CLIENT_CERT_KEY` from the environment, exposes the decoded PEM
//! blobs to kafkacat as anonymous pipes on descriptors 3/4/5, and forwards
//! the child's exit code. Secret material never touches the filesystem.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Command-line argument composition and the descriptor-to-role mapping.
pub mod args;
/// Anonymous pipe channels fed by background copy tasks.
pub mod channel;
/// Environment snapshot taken once at startup.
pub mod config;
/// Credential loading and base64 decoding.
pub mod credentials;
/// Child process spawning and exit relay.
pub mod launcher;
