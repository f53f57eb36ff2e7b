use std::env::var;

use dotenvy::dotenv;
use thiserror::Error;

use crate::{
    application::usecases::relay_inbound::RelayInboundConfig,
    infrastructure::messaging::{
        delivery::{DEFAULT_TIMEOUT_MS, DeliveryConfig},
        gupshup::{self, GupshupConfig},
        respond_io::{self, RespondIoConfig},
    },
    presentation::http::security::InboxAuthConfig,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env param {0}")]
    Missing(&'static str),
    #[error("invalid value for env param {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything read from the environment, once, at startup.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gupshup: GupshupConfig,
    pub respond_io: RespondIoConfig,
    pub channel_id: String,
    pub require_inbox_auth: bool,
    pub delivery: DeliveryConfig,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();

        Self::from_lookup(|name| var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| optional(name).ok_or(ConfigError::Missing(name));

        Ok(Config {
            host: optional("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", optional("PORT"), 3000)?,
            gupshup: GupshupConfig {
                api_url: optional("GUPSHUP_API_URL")
                    .unwrap_or_else(|| gupshup::DEFAULT_API_URL.to_string()),
                api_key: required("GUPSHUP_API_KEY")?,
                source_phone: required("GUPSHUP_SOURCE_PHONE")?,
                src_name: required("GUPSHUP_SRC_NAME")?,
            },
            respond_io: RespondIoConfig {
                webhook_url: optional("RESPOND_IO_WEBHOOK_URL")
                    .unwrap_or_else(|| respond_io::DEFAULT_WEBHOOK_URL.to_string()),
                token: required("RESPOND_IO_TOKEN")?,
            },
            channel_id: required("RESPOND_IO_CHANNEL_ID")?,
            require_inbox_auth: parse_bool(
                "RESPOND_IO_REQUIRE_AUTH",
                optional("RESPOND_IO_REQUIRE_AUTH"),
                true,
            )?,
            delivery: DeliveryConfig {
                timeout_ms: parse_or(
                    "DELIVERY_TIMEOUT_MS",
                    optional("DELIVERY_TIMEOUT_MS"),
                    DEFAULT_TIMEOUT_MS,
                )?,
            },
        })
    }

    pub fn relay_inbound(&self) -> RelayInboundConfig {
        RelayInboundConfig {
            channel_id: self.channel_id.clone(),
        }
    }

    pub fn inbox_auth(&self) -> InboxAuthConfig {
        InboxAuthConfig {
            token: self.respond_io.token.clone(),
            required: self.require_inbox_auth,
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

fn parse_bool(
    name: &'static str,
    value: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    match value {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { name, value }),
        },
        None => Ok(default),
    }
}
