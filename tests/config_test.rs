//! Tests for the environment configuration snapshot.

use std::collections::HashMap;

use kafkacat_hk::config::{Config, CredentialTransport, DEFAULT_KAFKACAT_BIN};

fn config_from(vars: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    Config::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_when_environment_is_empty() {
    let config = config_from(&[]);

    assert_eq!(config.kafkacat_bin.to_string_lossy(), DEFAULT_KAFKACAT_BIN);
    assert_eq!(config.transport, CredentialTransport::Encoded);
    assert!(config.trusted_cert.is_none());
    assert!(config.client_cert.is_none());
    assert!(config.client_cert_key.is_none());
    assert!(config.broker_url.is_none());
}

#[test]
fn kafkacat_bin_override() {
    let config = config_from(&[("KAFKACAT_BIN", "/opt/bin/kcat")]);
    assert_eq!(config.kafkacat_bin.to_string_lossy(), "/opt/bin/kcat");
}

#[test]
fn empty_kafkacat_bin_falls_back_to_default() {
    let config = config_from(&[("KAFKACAT_BIN", "")]);
    assert_eq!(config.kafkacat_bin.to_string_lossy(), DEFAULT_KAFKACAT_BIN);
}

#[test]
fn heroku_flag_selects_raw_transport() {
    let config = config_from(&[("HEROKU", "1")]);
    assert_eq!(config.transport, CredentialTransport::Raw);
}

#[test]
fn blank_heroku_flag_stays_encoded() {
    let config = config_from(&[("HEROKU", "")]);
    assert_eq!(config.transport, CredentialTransport::Encoded);
}

#[test]
fn blank_broker_url_is_treated_as_absent() {
    let config = config_from(&[("KAFKA_URL", "")]);
    assert!(config.broker_url.is_none());
}

#[test]
fn credential_values_are_captured_verbatim() {
    let config = config_from(&[
        ("KAFKA_TRUSTED_CERT", "ca-value"),
        ("KAFKA_CLIENT_CERT", "cert-value"),
        ("KAFKA_CLIENT_CERT_KEY", "key-value"),
        ("KAFKA_URL", "kafka://host:9096"),
    ]);

    assert_eq!(config.trusted_cert.as_deref(), Some("ca-value"));
    assert_eq!(config.client_cert.as_deref(), Some("cert-value"));
    assert_eq!(config.client_cert_key.as_deref(), Some("key-value"));
    assert_eq!(config.broker_url.as_deref(), Some("kafka://host:9096"));
}
