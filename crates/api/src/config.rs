/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `600`).
    ///
    /// Must exceed the solver timeout so slow solver runs are classified
    /// by the gateway rather than cut off by the transport.
    pub request_timeout_secs: u64,
    /// Path of the external solver executable (default: `../Model/timetable_generator`).
    pub solver_path: String,
    /// Wall-clock limit for one solver run in seconds (default: `300`).
    pub solver_timeout_secs: u64,
    /// Maximum number of solver child processes alive at once (default: `4`).
    pub solver_max_concurrent: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                       |
    /// |-------------------------|-----------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                     |
    /// | `PORT`                  | `5001`                                        |
    /// | `CORS_ORIGINS`          | `http://localhost:5173,http://127.0.0.1:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `600`                                         |
    /// | `SOLVER_PATH`           | `../Model/timetable_generator`                |
    /// | `SOLVER_TIMEOUT_SECS`   | `300`                                         |
    /// | `SOLVER_MAX_CONCURRENT` | `4`                                           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "600".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let solver_path =
            std::env::var("SOLVER_PATH").unwrap_or_else(|_| "../Model/timetable_generator".into());

        let solver_timeout_secs: u64 = std::env::var("SOLVER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("SOLVER_TIMEOUT_SECS must be a valid u64");

        let solver_max_concurrent: usize = std::env::var("SOLVER_MAX_CONCURRENT")
            .unwrap_or_else(|_| "4".into())
            .parse()
            .expect("SOLVER_MAX_CONCURRENT must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            solver_path,
            solver_timeout_secs,
            solver_max_concurrent,
        }
    }
}
