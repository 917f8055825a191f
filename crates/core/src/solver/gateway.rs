//! Solver invocation contract and its binary-subprocess implementation.
//!
//! Defines [`SolverGateway`], the trait the HTTP layer calls, along with
//! [`SolverError`]. [`BinarySolver`] is the production implementation: it
//! runs the external solver executable directly (not through a shell),
//! one isolated child process per invocation.

use std::os::unix::fs::PermissionsExt;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Semaphore;

use super::subprocess;

/// Errors that can occur while invoking the external solver.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The solver executable was not found at the configured path.
    #[error("Solver executable not found: {0}")]
    NotFound(String),

    /// The solver executable exists but lacks execute permissions.
    #[error("Solver executable is not executable: {0}")]
    PermissionDenied(String),

    /// The solver exceeded its configured timeout and was killed.
    #[error("Solver timed out after {elapsed_ms}ms")]
    Timeout {
        /// Elapsed wall-clock time before the process was killed.
        elapsed_ms: u64,
    },

    /// The solver ran but exited with a non-zero exit code.
    ///
    /// Carries the captured stderr verbatim -- it is the primary
    /// debugging signal when the solver rejects its input.
    #[error("Solver failed with exit code {exit_code}: {stderr}")]
    ExecutionFailed {
        /// Process exit code.
        exit_code: i32,
        /// Captured stderr output.
        stderr: String,
    },

    /// The solver exited successfully but its stdout did not parse as a
    /// JSON array of timetable documents.
    #[error("Solver produced malformed output: {0}")]
    MalformedOutput(String),

    /// An I/O error occurred while spawning or communicating with the process.
    #[error("I/O error communicating with solver: {0}")]
    Io(#[from] std::io::Error),

    /// Any other unexpected local failure inside the gateway.
    #[error("Internal solver gateway error: {0}")]
    Internal(String),
}

/// Trait implemented by solver invocation backends.
///
/// The contract is a single blocking call: one request document in, zero
/// or more timetable documents out. Keeping it behind a trait lets the
/// subprocess implementation be swapped for an async/queued execution
/// model without changing callers.
pub trait SolverGateway: Send + Sync {
    /// Run one solver invocation for `request`.
    ///
    /// An empty result vector is a valid success: the request yielded no
    /// timetable, which is distinct from malformed output.
    fn invoke(
        &self,
        request: Value,
    ) -> impl std::future::Future<Output = Result<Vec<Value>, SolverError>> + Send;
}

/// Gateway that runs the solver as a one-shot child process.
///
/// Each invocation spawns its own isolated child; the only state shared
/// between invocations is the permit pool bounding how many children may
/// run at once.
pub struct BinarySolver {
    binary_path: String,
    timeout: Duration,
    permits: Semaphore,
}

impl BinarySolver {
    /// Create a gateway for the executable at `binary_path`.
    ///
    /// `timeout` bounds each run's wall-clock time; `max_concurrent`
    /// bounds how many solver children may be alive at once (further
    /// invocations wait for a permit rather than spawning unbounded).
    pub fn new(binary_path: impl Into<String>, timeout: Duration, max_concurrent: usize) -> Self {
        Self {
            binary_path: binary_path.into(),
            timeout,
            permits: Semaphore::new(max_concurrent),
        }
    }

    /// Path of the solver executable this gateway spawns.
    pub fn binary_path(&self) -> &str {
        &self.binary_path
    }

    /// Check that the solver executable exists and is executable.
    ///
    /// Used before each spawn and by the health endpoint.
    pub async fn check_available(&self) -> Result<(), SolverError> {
        let metadata = tokio::fs::metadata(&self.binary_path)
            .await
            .map_err(|_| SolverError::NotFound(self.binary_path.clone()))?;

        let mode = metadata.permissions().mode();
        if mode & 0o111 == 0 {
            return Err(SolverError::PermissionDenied(format!(
                "{} is not executable (mode {mode:#o})",
                self.binary_path
            )));
        }
        Ok(())
    }
}

impl SolverGateway for BinarySolver {
    async fn invoke(&self, request: Value) -> Result<Vec<Value>, SolverError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| SolverError::Internal("Solver permit pool closed".to_string()))?;

        self.check_available().await?;

        tracing::info!(path = %self.binary_path, "Invoking external solver");

        let mut cmd = tokio::process::Command::new(&self.binary_path);
        let run = subprocess::run_solver(&mut cmd, &request, self.timeout).await?;

        if run.exit_code != 0 {
            return Err(SolverError::ExecutionFailed {
                exit_code: run.exit_code,
                stderr: run.stderr,
            });
        }

        let timetables: Vec<Value> = serde_json::from_str(run.stdout.trim())
            .map_err(|e| SolverError::MalformedOutput(e.to_string()))?;

        tracing::info!(
            count = timetables.len(),
            duration_ms = run.duration_ms,
            "Solver run completed"
        );

        Ok(timetables)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
