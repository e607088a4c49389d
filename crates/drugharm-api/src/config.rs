use std::env;
use std::net::SocketAddr;

/// Default listen address when `DRUGHARM_BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for log aggregation.
    Json,
    /// Human-readable output for local development.
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    Any,
    Exact(String),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub cors_origin: CorsOrigin,
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_raw =
            lookup("DRUGHARM_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|e| eyre::eyre!("invalid DRUGHARM_BIND_ADDR '{bind_raw}': {e}"))?;

        let log_format = match lookup("DRUGHARM_LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid DRUGHARM_LOG_FORMAT '{other}': expected 'json' or 'pretty'"
                ));
            }
        };

        let cors_origin = match lookup("DRUGHARM_CORS_ORIGIN") {
            None => CorsOrigin::Any,
            Some(origin) if origin == "*" => CorsOrigin::Any,
            Some(origin) => CorsOrigin::Exact(origin),
        };

        Ok(Self {
            bind_addr,
            log_format,
            cors_origin,
        })
    }
}
