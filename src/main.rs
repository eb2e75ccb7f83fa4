//! kafkacat-hk CLI entry point.
//!
//! Wraps kafkacat and automatically passes SSL arguments and broker URLs
//! based on Heroku-style Kafka environment variables.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use kafkacat_hk::args::compose;
use kafkacat_hk::channel::secure_channel;
use kafkacat_hk::config::Config;
use kafkacat_hk::credentials::CredentialSet;
use kafkacat_hk::launcher::{locate_kafkacat, Launch};

/// kafkacat-hk — kafkacat wrapper for Heroku-style Kafka environments.
///
/// Help and version flags are disabled so that every argument, `-h`
/// included, is forwarded to kafkacat untouched.
#[derive(Parser)]
#[command(name = "kafkacat-hk", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Arguments forwarded verbatim to kafkacat after the injected flags.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Quiet by default: kafkacat owns stdout/stderr, so our own traces
    // only appear when RUST_LOG asks for them.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    // Fail on a missing binary before any credential work or pipe
    // allocation happens.
    let program = locate_kafkacat(&config)?.to_path_buf();

    let creds = CredentialSet::load(&config).context("failed to load Kafka credentials")?;
    debug!(?creds, transport = ?config.transport, "credentials loaded");

    let ca = secure_channel(creds.ca)?;
    let cert = secure_channel(creds.cert)?;
    let key = secure_channel(creds.key)?;

    let args = compose(config.broker_url.as_deref(), &cli.args);

    let launch = Launch {
        program,
        args,
        channels: [ca, cert, key],
    };
    let code = launch.run().await?;

    debug!(code, "kafkacat exited");
    std::process::exit(code);
}
