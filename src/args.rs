//! kafkacat argument composition.
//!
//! [`CredentialRole`] is the single source of truth for which child
//! descriptor carries which credential. The composer renders the
//! `/dev/fd/N` paths from it and the launcher maps the pipe read ends to
//! the same numbers, so the two sides cannot drift apart.

/// Scheme prefix on Heroku `KAFKA_URL` broker lists.
const KAFKA_URL_SCHEME: &str = "kafka://";

/// The three credentials, in the fixed order they are attached to the
/// child: CA on fd 3, certificate on fd 4, key on fd 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialRole {
    /// CA certificate.
    Ca,
    /// Client certificate.
    Cert,
    /// Client private key.
    Key,
}

impl CredentialRole {
    /// All roles in attachment order.
    pub const ALL: [Self; 3] = [Self::Ca, Self::Cert, Self::Key];

    /// Descriptor number the child opens for this credential.
    pub fn child_fd(self) -> i32 {
        match self {
            Self::Ca => 3,
            Self::Cert => 4,
            Self::Key => 5,
        }
    }

    /// `/dev/fd/N` path the child is told to read.
    pub fn dev_fd_path(self) -> String {
        format!("/dev/fd/{}", self.child_fd())
    }

    /// The librdkafka location option for this credential.
    pub fn ssl_option(self) -> &'static str {
        match self {
            Self::Ca => "ssl.ca.location",
            Self::Cert => "ssl.certificate.location",
            Self::Key => "ssl.key.location",
        }
    }
}

/// Build the full kafkacat argument vector.
///
/// Always starts with the four fixed `-X` pairs (SSL transport plus the
/// three `/dev/fd` locations, in [`CredentialRole::ALL`] order), then an
/// optional `-b` broker flag, then the caller's trailing arguments
/// verbatim.
pub fn compose(broker_url: Option<&str>, trailing: &[String]) -> Vec<String> {
    let mut args = vec!["-X".to_owned(), "security.protocol=ssl".to_owned()];

    for role in CredentialRole::ALL {
        args.push("-X".to_owned());
        args.push(format!("{}={}", role.ssl_option(), role.dev_fd_path()));
    }

    if let Some(url) = broker_url {
        args.push("-b".to_owned());
        // Strip every occurrence: KAFKA_URL is a comma-separated list
        // where each broker carries its own kafka:// prefix.
        args.push(url.replace(KAFKA_URL_SCHEME, ""));
    }

    args.extend(trailing.iter().cloned());
    args
}
