pub mod client;
pub mod dynect;
pub mod error;
pub mod models;

pub use client::RecordApi;
pub use dynect::DynectClient;
pub use error::{CallError, CallResult, DynectError};
pub use models::{ClientOptions, ConnectionPolicy, Credentials, RecordRef};
