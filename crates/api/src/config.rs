use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret and storage settings have defaults
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Institution name printed in generated document headers.
    pub institution_name: String,
    /// JWT token validation configuration.
    pub jwt: JwtConfig,
    /// Object storage configuration.
    pub storage: StorageConfig,
}

/// Object storage settings for generated documents.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bucket generated documents are written to.
    pub bucket: String,
    /// Base URL under which stored objects are publicly reachable.
    pub public_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                              |
    /// |---------------------------|--------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                            |
    /// | `PORT`                    | `3000`                               |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                 |
    /// | `INSTITUTION_NAME`        | `Instituto Tecnológico de Puebla`    |
    /// | `STORAGE_BUCKET`          | `documents`                          |
    /// | `STORAGE_PUBLIC_BASE_URL` | **required**                         |
    /// | `JWT_SECRET`              | **required**                         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let institution_name = std::env::var("INSTITUTION_NAME")
            .unwrap_or_else(|_| "Instituto Tecnológico de Puebla".into());

        let storage = StorageConfig {
            bucket: std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "documents".into()),
            public_base_url: std::env::var("STORAGE_PUBLIC_BASE_URL")
                .expect("STORAGE_PUBLIC_BASE_URL must be set in the environment"),
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            institution_name,
            jwt,
            storage,
        }
    }
}
