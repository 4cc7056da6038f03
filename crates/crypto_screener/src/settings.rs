use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

use crate::external_services::{
    coingecko::COINGECKO_API_URL,
    reddit::{REDDIT_OAUTH_URL, REDDIT_TOKEN_URL},
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_USER_AGENT: &str = "crypto_screener_v1";

fn default_environment() -> String {
    "DEV".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_coingecko_base_url() -> String {
    COINGECKO_API_URL.to_string()
}

fn default_reddit_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_reddit_token_url() -> String {
    REDDIT_TOKEN_URL.to_string()
}

fn default_reddit_api_url() -> String {
    REDDIT_OAUTH_URL.to_string()
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub coingecko_api_key: String,
    #[serde(default = "default_coingecko_base_url")]
    pub coingecko_base_url: String,
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    #[serde(default = "default_reddit_user_agent")]
    pub reddit_user_agent: String,
    #[serde(default = "default_reddit_token_url")]
    pub reddit_token_url: String,
    #[serde(default = "default_reddit_api_url")]
    pub reddit_api_url: String,
}

impl Settings {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("PROD")
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let required = [
            ("COINGECKO_API_KEY", &self.coingecko_api_key),
            ("REDDIT_CLIENT_ID", &self.reddit_client_id),
            ("REDDIT_CLIENT_SECRET", &self.reddit_client_secret),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Message(format!("{} must not be empty", name)));
        }
        Ok(self)
    }
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    from_builder(Config::builder().add_source(Environment::default()))
}

fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    builder.build()?.try_deserialize::<Settings>()?.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> ConfigBuilder<DefaultState> {
        Config::builder()
            .set_override("coingecko_api_key", "cg-key")
            .unwrap()
            .set_override("reddit_client_id", "id")
            .unwrap()
            .set_override("reddit_client_secret", "secret")
            .unwrap()
    }

    #[test]
    fn defaults_fill_optional_values() {
        let settings = from_builder(credentials()).unwrap();

        assert_eq!(settings.environment, "DEV");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.coingecko_base_url, COINGECKO_API_URL);
        assert_eq!(settings.reddit_user_agent, "crypto_screener_v1");
        assert_eq!(settings.reddit_token_url, REDDIT_TOKEN_URL);
        assert_eq!(settings.reddit_api_url, REDDIT_OAUTH_URL);
        assert!(!settings.is_production());
    }

    #[test]
    fn overrides_are_respected() {
        let builder = credentials()
            .set_override("environment", "PROD")
            .unwrap()
            .set_override("port", 8080i64)
            .unwrap();
        let settings = from_builder(builder).unwrap();

        assert_eq!(settings.port, 8080);
        assert!(settings.is_production());
    }

    #[test]
    fn missing_credentials_fail() {
        let builder = Config::builder()
            .set_override("coingecko_api_key", "cg-key")
            .unwrap();
        assert!(from_builder(builder).is_err());
    }

    #[test]
    fn blank_credentials_fail() {
        let builder = credentials()
            .set_override("reddit_client_secret", "  ")
            .unwrap();
        let err = from_builder(builder).unwrap_err();
        assert!(err.to_string().contains("REDDIT_CLIENT_SECRET"));
    }
}
