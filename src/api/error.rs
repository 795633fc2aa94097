use thiserror::Error;

/// Failure of a single round trip to the REST service.
///
/// `DynectClient::call` never returns anything else as an error: every
/// transport, status and decoding problem is folded into one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("{0}")]
    Connection(String),

    #[error("{code} {reason} - {body}")]
    Status {
        code: u16,
        reason: String,
        body: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Not authenticated: no session token")]
    NotAuthenticated,
}

/// Errors raised by session and record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DynectError {
    #[error(transparent)]
    Call(#[from] CallError),

    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    #[error("{0}")]
    Api(String),

    #[error("Can't find record {address} under {fqdn} in zone {zone}")]
    RecordNotFound {
        zone: String,
        fqdn: String,
        address: String,
    },
}

impl DynectError {
    /// The transport-level failure behind this error, if any.
    pub fn call_error(&self) -> Option<&CallError> {
        match self {
            DynectError::Call(e) => Some(e),
            _ => None,
        }
    }
}

pub type CallResult = std::result::Result<serde_json::Value, CallError>;

pub type Result<T> = std::result::Result<T, DynectError>;
