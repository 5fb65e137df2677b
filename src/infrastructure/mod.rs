pub mod config;

pub use config::{AssetConfig, ConfigError, ServerConfig, ServiceConfig};
