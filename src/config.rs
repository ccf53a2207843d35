use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use dotenvy::dotenv;

const DEFAULT_DB_PATH: &str = "data/fortune.db";
const DEFAULT_SHARE_BASE_URL: &str = "https://oneulunse.com";
/// Korea Standard Time.
const DEFAULT_TZ_OFFSET_HOURS: i32 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: String,
    pub catalog_path: Option<PathBuf>, // Built-in catalog when unset
    pub tz_offset_hours: i32,
    pub share_base_url: String,
}

impl Config {
    /// Builds a config from a variable lookup; unset or unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let tz_offset_hours = match lookup("TZ_OFFSET_HOURS") {
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(hours) if (-12..=14).contains(&hours) => hours,
                _ => {
                    tracing::warn!(value = %raw, "Ignoring invalid TZ_OFFSET_HOURS");
                    DEFAULT_TZ_OFFSET_HOURS
                }
            },
            None => DEFAULT_TZ_OFFSET_HOURS,
        };

        Config {
            db_path: lookup("DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            tz_offset_hours,
            share_base_url: lookup("SHARE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SHARE_BASE_URL.to_string()),
        }
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let conf = from_map(&[]);
        assert_eq!(conf.db_path, "data/fortune.db");
        assert_eq!(conf.catalog_path, None);
        assert_eq!(conf.tz_offset_hours, 9);
        assert_eq!(conf.share_base_url, "https://oneulunse.com");
    }

    #[test]
    fn test_overrides() {
        let conf = from_map(&[
            ("DB_PATH", "/tmp/unse.db"),
            ("CATALOG_PATH", "content/catalog.json"),
            ("TZ_OFFSET_HOURS", "-5"),
            ("SHARE_BASE_URL", "http://localhost:8080"),
        ]);
        assert_eq!(conf.db_path, "/tmp/unse.db");
        assert_eq!(conf.catalog_path, Some(PathBuf::from("content/catalog.json")));
        assert_eq!(conf.tz_offset_hours, -5);
        assert_eq!(conf.share_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_invalid_offset_falls_back() {
        assert_eq!(from_map(&[("TZ_OFFSET_HOURS", "KST")]).tz_offset_hours, 9);
        assert_eq!(from_map(&[("TZ_OFFSET_HOURS", "30")]).tz_offset_hours, 9);
        assert_eq!(from_map(&[("CATALOG_PATH", " ")]).catalog_path, None);
    }
}
