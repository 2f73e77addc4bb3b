//! Server configuration, read from a TOML file.

use anyhow::Context;
use dropshot::ConfigDropshot;
use dropshot::ConfigLogging;
use dropshot::ConfigLoggingIfExists;
use dropshot::ConfigLoggingLevel;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub dropshot: ConfigDropshot,
    pub log: ConfigLogging,
    pub database: ConfigDatabase,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ConfigDatabase {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    1
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Config::from_toml(&contents)
            .with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Config> {
        let config: Config = toml::from_str(contents)?;
        if config.database.max_connections == 0 {
            anyhow::bail!("database.max_connections must be at least 1");
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            dropshot: ConfigDropshot {
                bind_address: SocketAddr::from(([127, 0, 0, 1], 12344)),
                ..Default::default()
            },
            log: ConfigLogging::File {
                level: ConfigLoggingLevel::Debug,
                path: "/dev/stdout".into(),
                if_exists: ConfigLoggingIfExists::Append,
            },
            database: ConfigDatabase {
                url: String::from(
                    "postgresql://root@127.0.0.1:12345/defaultdb?sslmode=disable",
                ),
                max_connections: default_max_connections(),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use dropshot::ConfigLogging;

    const EXAMPLE: &str = r#"
        [dropshot]
        bind_address = "0.0.0.0:8080"
        request_body_max_bytes = 1024

        [log]
        mode = "stderr-terminal"
        level = "info"

        [database]
        url = "postgresql://counter@db:5432/counter"
    "#;

    #[test]
    fn test_parse() {
        let config = Config::from_toml(EXAMPLE).unwrap();
        assert_eq!(config.dropshot.bind_address.port(), 8080);
        assert!(matches!(config.log, ConfigLogging::StderrTerminal { .. }));
        assert_eq!(config.database.url, "postgresql://counter@db:5432/counter");
        assert_eq!(config.database.max_connections, 1);
    }

    #[test]
    fn test_missing_database() {
        let contents = EXAMPLE.replace("[database]", "[other]");
        assert!(Config::from_toml(&contents).is_err());
    }

    #[test]
    fn test_zero_connections() {
        let contents = format!("{}max_connections = 0\n", EXAMPLE);
        let error = Config::from_toml(&contents).unwrap_err();
        assert!(error.to_string().contains("max_connections"));
    }

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.dropshot.bind_address.to_string(), "127.0.0.1:12344");
        assert_eq!(config.database.max_connections, 1);
    }
}
