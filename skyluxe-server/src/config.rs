//! Server configuration options.

use std::path::Path;

use anyhow::Error;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
    value::Uncased,
};
use serde::{Deserialize, Serialize};

/// The default port the server is hosted on.
pub const DEFAULT_PORT: u16 = 10000;

/// The default Duffel API endpoint.
pub const DEFAULT_DUFFEL_ENDPOINT: &str = "https://api.duffel.com";

/// The Duffel API version the gateway speaks.
pub const DEFAULT_DUFFEL_VERSION: &str = "v2";

/// How many offers a search returns by default.
pub const DEFAULT_OFFER_LIMIT: u32 = 10;

/// Server configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub duffel: DuffelConfig,
}

impl Config {
    /// Reads the config from the environment.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Config, Error> {
        Config::figment(config_path).extract().map_err(Error::from)
    }

    fn figment(config_path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("SKYLUXE_").split("__"))
            .merge(Env::raw().only(&["PORT", "DUFFEL_TOKEN"]).map(|k| {
                if k == "DUFFEL_TOKEN" {
                    Uncased::from("DUFFEL.TOKEN")
                } else {
                    Uncased::from(format!("SERVER.{}", k))
                }
            }))
    }
}

/// Server config.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    /// The port the server is binded to.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { port: DEFAULT_PORT }
    }
}

/// Flight provider config.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DuffelConfig {
    /// The base url of the Duffel API.
    pub endpoint: String,
    /// The value of the `Duffel-Version` header.
    pub version: String,
    /// The access token.
    ///
    /// The server starts without one, but every search fails until it is
    /// set.
    #[serde(default)]
    pub token: Option<String>,
    /// The maximum number of offers a search returns.
    pub offer_limit: u32,
}

impl Default for DuffelConfig {
    fn default() -> Self {
        DuffelConfig {
            endpoint: DEFAULT_DUFFEL_ENDPOINT.to_owned(),
            version: DEFAULT_DUFFEL_VERSION.to_owned(),
            token: None,
            offer_limit: DEFAULT_OFFER_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use figment::Jail;

    #[test]
    fn defaults_without_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();

            let config: Config = Config::figment("skyluxe.toml").extract()?;
            assert_eq!(config, Config::default());
            assert_eq!(config.server.port, 10000);
            assert_eq!(config.duffel.offer_limit, 10);

            Ok(())
        });
    }

    #[test]
    fn raw_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "skyluxe.toml",
                r#"
                [server]
                port = 4000

                [duffel]
                version = "v1"
                "#,
            )?;
            jail.set_env("PORT", "8080");
            jail.set_env("DUFFEL_TOKEN", "duffel_test_abc");

            let config: Config = Config::figment("skyluxe.toml").extract()?;
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.duffel.version, "v1");
            assert_eq!(config.duffel.token.as_deref(), Some("duffel_test_abc"));

            Ok(())
        });
    }

    #[test]
    fn prefixed_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("SKYLUXE_DUFFEL__OFFER_LIMIT", "3");

            let config: Config = Config::figment("skyluxe.toml").extract()?;
            assert_eq!(config.duffel.offer_limit, 3);

            Ok(())
        });
    }
}
