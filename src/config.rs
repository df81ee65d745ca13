//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MEDIA_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MEDIA_MAX_BYTES: u64 = 32 * 1024 * 1024;
pub const DEFAULT_MAX_DOCUMENTS: usize = 64;

/// Typed runtime knobs. Every value has a default; configuration never
/// fails at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory served at `/` (the demo page).
    pub static_dir: PathBuf,
    /// Timeout for requests against the inspected endpoint.
    pub probe_timeout_secs: u64,
    /// Timeout for image metadata fetches.
    pub media_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Cap on fetched image payloads.
    pub media_max_bytes: u64,
    /// Documents kept in memory before oldest-first eviction.
    pub max_documents: usize,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// - `PORT`: listen port
    /// - `STATIC_DIR`: demo page directory
    /// - `PROBE_TIMEOUT_SECS`, `MEDIA_TIMEOUT_SECS`, `CONNECT_TIMEOUT_SECS`
    /// - `MEDIA_MAX_BYTES`, `MAX_DOCUMENTS`
    #[must_use]
    pub fn from_env() -> Self {
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            static_dir,
            probe_timeout_secs: env_parse("PROBE_TIMEOUT_SECS", DEFAULT_PROBE_TIMEOUT_SECS),
            media_timeout_secs: env_parse("MEDIA_TIMEOUT_SECS", DEFAULT_MEDIA_TIMEOUT_SECS),
            connect_timeout_secs: env_parse("CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            media_max_bytes: env_parse("MEDIA_MAX_BYTES", DEFAULT_MEDIA_MAX_BYTES),
            max_documents: env_parse("MAX_DOCUMENTS", DEFAULT_MAX_DOCUMENTS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            media_timeout_secs: DEFAULT_MEDIA_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            media_max_bytes: DEFAULT_MEDIA_MAX_BYTES,
            max_documents: DEFAULT_MAX_DOCUMENTS,
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
