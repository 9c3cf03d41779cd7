use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing — in particular the
/// Gemini API key, so the model-calling path can never run unconfigured.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-wide, so both cases live in one test.
    #[test]
    fn test_from_env_requires_api_key() {
        std::env::remove_var("GEMINI_API_KEY");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));

        std::env::set_var("GEMINI_API_KEY", "test-key");
        std::env::remove_var("PORT");
        let config = Config::from_env().unwrap();
        assert_eq!(config.gemini_api_key, "test-key");
        assert_eq!(config.port, 8080);
        std::env::remove_var("GEMINI_API_KEY");
    }
}
