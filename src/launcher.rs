//! Child process spawning and exit relay.
//!
//! Spawns kafkacat with inherited stdio and the three credential pipes
//! attached at the descriptor numbers [`CredentialRole`] declares, waits
//! for it to finish, and hands the exit code back to the caller.

use std::os::fd::OwnedFd;
use std::path::{Path, PathBuf};

use anyhow::Context;
use command_fds::{CommandFdExt, FdMapping};
use tracing::debug;

use crate::args::CredentialRole;
use crate::config::Config;

/// Verify the configured kafkacat binary exists before any pipe is
/// created.
///
/// # Errors
///
/// Returns an error telling the operator to set `KAFKACAT_BIN` when the
/// path does not exist.
pub fn locate_kafkacat(config: &Config) -> anyhow::Result<&Path> {
    let bin = config.kafkacat_bin.as_path();
    anyhow::ensure!(
        bin.exists(),
        "{} does not exist. Please set KAFKACAT_BIN to the location of your kafkacat binary",
        bin.display()
    );
    Ok(bin)
}

/// A fully assembled child invocation: program, arguments, and the three
/// credential read ends. Built once, consumed once by [`Launch::run`].
#[derive(Debug)]
pub struct Launch {
    /// Resolved kafkacat binary path.
    pub program: PathBuf,
    /// Composed argument vector.
    pub args: Vec<String>,
    /// Credential pipe read ends in [`CredentialRole::ALL`] order.
    pub channels: [OwnedFd; 3],
}

impl Launch {
    /// Spawn the child and block until it terminates.
    ///
    /// Stdio is inherited; the channels are mapped to child descriptors
    /// 3, 4, 5 in CA/certificate/key order. The read ends are consumed by
    /// the spawn and closed when the command is dropped, on success and
    /// failure alike.
    ///
    /// # Errors
    ///
    /// Fails when the descriptors cannot be mapped, the spawn itself
    /// fails, or the child terminates without a representable exit code
    /// (killed by a signal). A non-zero child exit is not an error — it
    /// is the relayed status.
    pub async fn run(self) -> anyhow::Result<i32> {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args);

        let mappings = CredentialRole::ALL
            .into_iter()
            .zip(self.channels)
            .map(|(role, parent_fd)| FdMapping {
                parent_fd,
                child_fd: role.child_fd(),
            })
            .collect();
        cmd.fd_mappings(mappings)
            .context("failed to map credential pipes to child descriptors")?;

        debug!(program = %self.program.display(), args = ?self.args, "spawning kafkacat");

        let status = cmd
            .status()
            .await
            .with_context(|| format!("failed to run {}", self.program.display()))?;

        status.code().ok_or_else(|| {
            anyhow::anyhow!("{} terminated without an exit code", self.program.display())
        })
    }
}
