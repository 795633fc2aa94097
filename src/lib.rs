//! Client for the DynECT Platform REST API.
//!
//! [`DynectClient`] owns the session token and the transport handle and
//! implements [`RecordApi`] for address records and zone publishing. The
//! [`tool`] module builds the list/add/delete workflows on top of it.
//!
//! ```no_run
//! use dynect::{ClientOptions, Credentials, DynectClient, RecordApi};
//!
//! # async fn run() -> Result<(), dynect::DynectError> {
//! let credentials = Credentials::new("customer", "user", "password");
//! let mut dyn_client = DynectClient::connect(credentials, ClientOptions::default()).await?;
//! dyn_client.keepalive().await?;
//! let listing = dyn_client.read_a_record("domain.tld", "domain.tld", None).await?;
//! println!("{}", listing);
//! dyn_client.close().await
//! # }
//! ```

pub mod api;
pub mod config;
pub mod tool;

pub use api::{
    CallError, CallResult, ClientOptions, ConnectionPolicy, Credentials, DynectClient,
    DynectError, RecordApi, RecordRef,
};

#[cfg(test)]
mod tests;
