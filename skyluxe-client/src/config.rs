//! Client configuration.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
    value::Uncased,
};
use serde::{Deserialize, Serialize};

/// Where the gateway listens when run locally.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:10000";

/// The main configuration struct.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// Gateway access configuration.
    pub api: ApiConfig,
    /// What the search form starts out with.
    pub search: SearchDefaults,
}

impl Config {
    /// Loads a config from the environment and a given config path.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
        Config::figment(config_path).extract()
    }

    fn figment(config_path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("SKYLUXE_CLIENT_").split("__"))
            .merge(
                Env::raw()
                    .only(&["GATEWAY_URL"])
                    .map(|_| Uncased::from("API.ENDPOINT")),
            )
    }
}

/// Gateway connectivity config.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    /// The gateway's base url.
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }
}

/// Initial search form values.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SearchDefaults {
    pub origin: String,
    pub destination: String,
    pub date: String,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        SearchDefaults {
            origin: "DEL".to_owned(),
            destination: "DXB".to_owned(),
            date: "2026-06-25".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use figment::Jail;

    #[test]
    fn gateway_url_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "skyluxe-client.toml",
                r#"
                [search]
                origin = "LHR"
                destination = "JFK"
                date = "2026-07-01"
                "#,
            )?;
            jail.set_env("GATEWAY_URL", "https://engine.example.com");

            let config: Config = Config::figment("skyluxe-client.toml").extract()?;
            assert_eq!(config.api.endpoint, "https://engine.example.com");
            assert_eq!(config.search.origin, "LHR");
            assert_eq!(config.search.date, "2026-07-01");

            Ok(())
        });
    }

    #[test]
    fn defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();

            let config: Config = Config::figment("skyluxe-client.toml").extract()?;
            assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
            assert_eq!(config.search, SearchDefaults::default());

            Ok(())
        });
    }
}
