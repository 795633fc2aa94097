use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api2.dynect.net";

#[derive(Clone)]
pub struct Credentials {
    pub customer_name: String,
    pub user_name: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        customer_name: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("customer_name", &self.customer_name)
            .field("user_name", &self.user_name)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPolicy {
    /// Keep the transport handle between calls. Released on logout or close.
    Reuse,
    /// Drop the transport handle after every call and reconnect on the next
    /// one. Costs a fresh TCP and TLS handshake per request.
    PerCall,
}

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub policy: ConnectionPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
            policy: ConnectionPolicy::Reuse,
        }
    }
}

impl ClientOptions {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_policy(mut self, policy: ConnectionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Identifies an address record. `record_id` is assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub zone: String,
    pub fqdn: String,
    pub record_id: Option<String>,
}

impl RecordRef {
    pub fn new(zone: impl Into<String>, fqdn: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            fqdn: fqdn.into(),
            record_id: None,
        }
    }

    pub fn with_id(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = Some(record_id.into());
        self
    }

    /// Resource path relative to the REST prefix.
    ///
    /// `ARecord/{zone}/{fqdn}` without an id, `ARecord/{zone}/{fqdn}/{id}/`
    /// with one. The trailing slash is part of the wire format.
    pub fn resource(&self) -> String {
        match &self.record_id {
            Some(id) => format!("ARecord/{}/{}/{}/", self.zone, self.fqdn, id),
            None => format!("ARecord/{}/{}", self.zone, self.fqdn),
        }
    }
}

/// Envelope the service wraps around every response body.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub data: T,
    #[serde(default)]
    pub msgs: Vec<ApiMessage>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Text of the first message, which carries the service's diagnostic.
    pub fn first_info(&self) -> String {
        self.msgs
            .first()
            .and_then(|m| m.info.clone())
            .unwrap_or_else(|| format!("request finished with status {}", self.status))
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    #[serde(rename = "INFO")]
    pub info: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ARecordData {
    pub rdata: ARecordRdata,
}

#[derive(Debug, Deserialize)]
pub struct ARecordRdata {
    pub address: String,
}
