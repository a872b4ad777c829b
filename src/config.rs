use std::{fmt, path::{Path, PathBuf}, time::Duration};

use ::config::{Config, Environment, File, FileFormat};
use rumqttc::QoS;
use serde::Deserialize;
use thiserror::Error;

use crate::{bus::BusInterface, frame::CompletionPolicy};

/// Overrides look like `EFLEX_MQTT__HOSTNAME=broker.lan`
pub const ENV_PREFIX: &str = "EFLEX";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("loading configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("log_dir `{0}` is not a directory")]
    LogDir(PathBuf),
    #[error("invalid mqtt qos {0}, expected 0, 1 or 2")]
    Qos(u8),
    #[error("mqtt username and password must be set together")]
    Credentials,
}

#[derive(Debug, Deserialize)]
pub struct BridgeConfig {
    pub logging: LoggingConfig,
    pub can: CanConfig,
    pub mqtt: MqttConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log process memory at startup, after each cycle and at shutdown
    #[serde(default)]
    pub profile: bool,
}

#[derive(Debug, Deserialize)]
pub struct CanConfig {
    #[serde(default)]
    pub interface: BusInterface,
    pub channel: String,
    #[serde(default)]
    pub completion: CompletionPolicy,
}

#[derive(Deserialize)]
pub struct MqttConfig {
    pub hostname: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub topic: String,
    /// seconds
    #[serde(default = "default_keepalive")]
    pub keepalive: u64,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default = "default_qos")]
    pub qos: u8,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_port() -> u16 {
    1883
}

fn default_keepalive() -> u64 {
    60
}

fn default_qos() -> u8 {
    2
}

impl BridgeConfig {
    /// Read `path` as INI, then apply `EFLEX_` environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        Self::validate(cfg.try_deserialize()?)
    }

    pub fn parse(ini: &str) -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .add_source(File::from_str(ini, FileFormat::Ini))
            .build()?;
        Self::validate(cfg.try_deserialize()?)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !self.logging.log_dir.is_dir() {
            return Err(ConfigError::LogDir(self.logging.log_dir));
        }
        self.mqtt.qos_level()?;
        if self.mqtt.username.is_some() != self.mqtt.password.is_some() {
            return Err(ConfigError::Credentials);
        }
        Ok(self)
    }
}

impl MqttConfig {
    pub fn qos_level(&self) -> Result<QoS, ConfigError> {
        match self.qos {
            0 => Ok(QoS::AtMostOnce),
            1 => Ok(QoS::AtLeastOnce),
            2 => Ok(QoS::ExactlyOnce),
            other => Err(ConfigError::Qos(other)),
        }
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keepalive)
    }

    pub fn credentials(&self) -> Option<(String, String)> {
        Some((self.username.clone()?, self.password.clone()?))
    }
}

impl fmt::Debug for MqttConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MqttConfig")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("topic", &self.topic)
            .field("keepalive", &self.keepalive)
            .field("client_id", &self.client_id)
            .field("qos", &self.qos)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
