pub mod models;

pub use models::Config;

use anyhow::{Context, Result};
use std::{fs::File, io::Read, time::Duration};
use validator::Validate;

use crate::api::{ClientOptions, ConnectionPolicy, Credentials};

impl Config {
    pub fn load(config_file: &str) -> Result<Self> {
        let mut file = File::open(config_file)
            .with_context(|| format!("Failed to open config file: {}", config_file))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read config file: {}", config_file))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_file))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", config_file))?;
        Ok(config)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.customer_name.to_string(),
            self.user_name.to_string(),
            self.password.to_string(),
        )
    }

    pub fn client_options(&self) -> ClientOptions {
        let policy = if self.reuse_connection {
            ConnectionPolicy::Reuse
        } else {
            ConnectionPolicy::PerCall
        };

        ClientOptions {
            api_url: self.api_url.to_string(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            policy,
        }
    }
}
