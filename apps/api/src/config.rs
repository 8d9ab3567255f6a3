use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file overriding the built-in lexicon tables.
    pub lexicon_path: Option<PathBuf>,
    /// Shortest trimmed résumé text the API accepts.
    pub min_resume_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            lexicon_path: None,
            min_resume_chars: 50,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            lexicon_path: std::env::var_os("LEXICON_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            min_resume_chars: parse_env("MIN_RESUME_CHARS", defaults.min_resume_chars)
                .context("MIN_RESUME_CHARS must be a non-negative integer")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let port: u16 = parse_env("ATSCORE_TEST_UNSET_VARIABLE", 9090).unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("ATSCORE_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("ATSCORE_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
    }
}
