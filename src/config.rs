use std::net::IpAddr;

use axum::http::HeaderValue;

/// Origins always allowed for local development, next to `CLIENT_ORIGIN`.
pub const DEV_ORIGINS: [&str; 3] = [
    "http://localhost:5500",
    "http://127.0.0.1:5500",
    "http://localhost:3000",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: String,
    pub collection: String,
    pub host: IpAddr,
    pub port: u16,
    pub client_origin: Option<String>,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let store_url = get("MONGODB_URI")
            .ok_or_else(|| "Missing required environment variable: MONGODB_URI".to_string())?;

        let collection = or("MONGODB_COLLECTION", "scontacts");

        let host: IpAddr = or("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOST: {e}"))?;

        let port: u16 = or("PORT", "5500")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let client_origin = get("CLIENT_ORIGIN").map(|o| o.trim().to_string());
        if let Some(origin) = &client_origin {
            HeaderValue::from_str(origin)
                .map_err(|e| format!("Invalid CLIENT_ORIGIN '{origin}': {e}"))?;
        }

        let max_body_size: usize = or("MAX_BODY_SIZE", "102400")
            .parse()
            .map_err(|e| format!("Invalid MAX_BODY_SIZE: {e}"))?;

        let log_level = or("LOG_LEVEL", "info");

        Ok(Config {
            store_url,
            collection,
            host,
            port,
            client_origin,
            max_body_size,
            log_level,
        })
    }

    /// The CORS allow-list: the configured production origin first, then the dev origins.
    pub fn allowed_origins(&self) -> Vec<String> {
        self.client_origin
            .iter()
            .cloned()
            .chain(DEV_ORIGINS.iter().map(|o| o.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[("MONGODB_URI", "mongodb://localhost/contacts")]).unwrap();
        assert_eq!(config.port, 5500);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.collection, "scontacts");
        assert_eq!(config.max_body_size, 102_400);
        assert_eq!(config.log_level, "info");
        assert!(config.client_origin.is_none());
    }

    #[test]
    fn store_url_is_required() {
        let err = load(&[("PORT", "8080")]).unwrap_err();
        assert!(err.contains("MONGODB_URI"));

        let err = load(&[("MONGODB_URI", "  ")]).unwrap_err();
        assert!(err.contains("MONGODB_URI"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = load(&[("MONGODB_URI", "memory://"), ("PORT", "eighty")]).unwrap_err();
        assert!(err.starts_with("Invalid PORT"));
    }

    #[test]
    fn rejects_bad_origin() {
        let err = load(&[("MONGODB_URI", "memory://"), ("CLIENT_ORIGIN", "https://a\nb")]).unwrap_err();
        assert!(err.starts_with("Invalid CLIENT_ORIGIN"));
    }

    #[test]
    fn allowed_origins_put_client_origin_first() {
        let config = load(&[
            ("MONGODB_URI", "memory://"),
            ("CLIENT_ORIGIN", "https://portfolio.example.com"),
        ])
        .unwrap();
        let origins = config.allowed_origins();
        assert_eq!(origins.len(), 4);
        assert_eq!(origins[0], "https://portfolio.example.com");
        assert!(origins.contains(&"http://localhost:3000".to_string()));

        let config = load(&[("MONGODB_URI", "memory://")]).unwrap();
        assert_eq!(config.allowed_origins(), DEV_ORIGINS.map(String::from).to_vec());
    }
}
