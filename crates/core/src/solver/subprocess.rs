//! Shared subprocess plumbing for the solver gateway.
//!
//! Provides [`run_solver`], which spawns a prepared [`tokio::process::Command`],
//! pipes the serialized request to its stdin, captures stdout/stderr, and
//! enforces the configured wall-clock timeout.

use std::process::Stdio;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

use super::gateway::SolverError;

/// Maximum stdout or stderr size captured per stream (10 MiB).
///
/// Output exceeding this limit is truncated to prevent memory exhaustion
/// from a runaway solver.
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Raw outcome of one solver run: captured streams plus exit status.
///
/// Classification into success or a [`SolverError`] variant is the
/// gateway's job; this layer only reports what the child did.
pub(crate) struct SolverRun {
    /// Complete stdout captured from the process.
    pub stdout: String,
    /// Complete stderr captured from the process.
    pub stderr: String,
    /// Process exit code (`-1` if killed by signal).
    pub exit_code: i32,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Spawn `cmd`, pipe the JSON `request` to its stdin, and collect the run.
///
/// The caller is responsible for setting the command program before
/// calling this function. `kill_on_drop(true)` ensures the child is
/// killed when dropped (e.g. on timeout).
pub(crate) async fn run_solver(
    cmd: &mut Command,
    request: &Value,
    timeout: Duration,
) -> Result<SolverRun, SolverError> {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let payload = serde_json::to_vec(request)
        .map_err(|e| SolverError::Internal(format!("Failed to serialize solver request: {e}")))?;

    let start = Instant::now();

    let mut child = cmd.spawn().map_err(SolverError::Io)?;

    // Write the request to stdin in full, then close it to signal
    // end-of-input. A solver that closes stdin early surfaces through its
    // exit status, not the pipe error, so the write is best-effort.
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(&payload).await;
        drop(stdin);
    }

    // Take stdout/stderr handles and read them in spawned tasks so we can
    // still call `child.wait()` (which borrows `&mut child`).
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();

    let stdout_task = tokio::spawn(async move { read_stream(stdout_handle).await });
    let stderr_task = tokio::spawn(async move { read_stream(stderr_handle).await });

    // Wait for the child process with a timeout. If the timeout fires,
    // `child` is dropped with `kill_on_drop(true)`, killing the process.
    let wait_result = tokio::time::timeout(timeout, child.wait()).await;

    match wait_result {
        Ok(Ok(status)) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let stdout_bytes = stdout_task.await.unwrap_or_default();
            let stderr_bytes = stderr_task.await.unwrap_or_default();

            Ok(SolverRun {
                stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
                stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
                exit_code: status.code().unwrap_or(-1),
                duration_ms,
            })
        }
        Ok(Err(e)) => Err(SolverError::Io(e)),
        Err(_elapsed) => Err(SolverError::Timeout {
            elapsed_ms: start.elapsed().as_millis() as u64,
        }),
    }
}

/// Read an entire output stream into a byte buffer, capped at [`MAX_OUTPUT_BYTES`].
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = (&mut h)
            .take(MAX_OUTPUT_BYTES as u64)
            .read_to_end(&mut buf)
            .await;
    }
    buf
}
