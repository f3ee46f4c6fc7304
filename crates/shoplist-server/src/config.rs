use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "data/shopping-list.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Server settings, read from `SHOPLIST_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_file: PathBuf,
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let data_file = lookup("SHOPLIST_DATA_FILE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

        let bind = lookup("SHOPLIST_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .map_err(|e| eyre::eyre!("invalid SHOPLIST_BIND_ADDR {bind:?}: {e}"))?;

        let log_format = match lookup("SHOPLIST_LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid SHOPLIST_LOG_FORMAT {other:?} (expected \"json\" or \"pretty\")"
                ));
            }
        };

        Ok(Self {
            data_file: PathBuf::from(data_file),
            bind_addr,
            log_format,
        })
    }
}
