//! Anonymous pipe channels for passing secret bytes to a child process.
//!
//! Each channel is a one-shot unidirectional conduit: a background task
//! streams one in-memory buffer into the write end and closes it, while
//! the read end is handed to the child as an inheritable descriptor. The
//! secret never exists as a filesystem artifact.

use std::io::{self, Write};
use std::os::fd::OwnedFd;

use anyhow::Context;
use tracing::debug;

/// Create a readable channel pre-loaded with `bytes`.
///
/// Allocates an anonymous pipe and spawns a fire-and-forget blocking task
/// that writes the full buffer into the write end, then closes it by
/// drop — on write errors too, so the reader always sees EOF. Returns the
/// read end immediately; the copy proceeds concurrently and the child
/// synchronizes with it through the pipe's own blocking semantics.
///
/// The caller owns the read end and releases it by drop on every exit
/// path. The write end and the buffer are owned exclusively by the copy
/// task; there is no shared state and no way to cancel it.
///
/// # Errors
///
/// Fails only when the operating system refuses to allocate a pipe.
pub fn secure_channel(bytes: Vec<u8>) -> anyhow::Result<OwnedFd> {
    let (reader, mut writer) = io::pipe().context("failed to allocate credential pipe")?;

    tokio::task::spawn_blocking(move || {
        // A pipe holds ~64 KiB; larger PEM blobs block here until the
        // child drains them, which is why this runs off the main flow.
        if let Err(e) = writer.write_all(&bytes) {
            debug!(error = %e, "credential pipe writer stopped early");
        }
        // writer dropped: reader sees EOF after the buffered bytes.
    });

    Ok(reader.into())
}
