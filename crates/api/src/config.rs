use std::path::PathBuf;

use clipfix_core::eligibility::parse_flag;

/// Default public host prefixed to stored clip paths.
pub const DEFAULT_ASSET_BASE_URL: &str = "https://content-pic3.oss-cn-hangzhou.aliyuncs.com";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local use. In production, override
/// via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// `*` mirrors the request origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Asset host used to build public clip URLs.
    pub asset_base_url: String,
    /// When set, `/audio` only serves files below this directory.
    pub audio_root: Option<PathBuf>,
    /// Keep at-quota items listed for users who already annotated them.
    pub quota_owner_override: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                            |
    /// |------------------------|----------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                          |
    /// | `PORT`                 | `5000`                                             |
    /// | `CORS_ORIGINS`         | `*`                                                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                               |
    /// | `ASSET_BASE_URL`       | `https://content-pic3.oss-cn-hangzhou.aliyuncs.com` |
    /// | `AUDIO_ROOT`           | unset                                              |
    /// | `QUOTA_OWNER_OVERRIDE` | `false`                                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let asset_base_url =
            std::env::var("ASSET_BASE_URL").unwrap_or_else(|_| DEFAULT_ASSET_BASE_URL.into());

        let audio_root = std::env::var("AUDIO_ROOT")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let quota_owner_override =
            parse_flag(std::env::var("QUOTA_OWNER_OVERRIDE").ok().as_deref());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            asset_base_url,
            audio_root,
            quota_owner_override,
        }
    }
}
