use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

use crate::api::models::DEFAULT_API_URL;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "Customer name cannot be empty"))]
    pub customer_name: Cow<'static, str>,

    #[validate(length(min = 1, message = "User name cannot be empty"))]
    pub user_name: Cow<'static, str>,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: Cow<'static, str>,

    #[serde(default = "default_api_url")]
    #[validate(length(min = 1, message = "API URL cannot be empty"))]
    pub api_url: Cow<'static, str>,

    #[serde(default = "default_connect_timeout")]
    #[validate(range(min = 1, message = "Connect timeout must be greater than 0"))]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_timeout")]
    #[validate(range(min = 1, message = "Request timeout must be greater than 0"))]
    pub timeout_secs: u64,

    #[serde(default = "default_reuse_connection")]
    pub reuse_connection: bool,

    #[serde(default)]
    pub record_ttl: u32,
}

fn default_api_url() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_API_URL)
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_timeout() -> u64 {
    30
}

fn default_reuse_connection() -> bool {
    true
}
