use super::{
    client::RecordApi,
    error::{CallError, CallResult, DynectError, Result},
    models::*,
};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{header::CONTENT_TYPE, Method, StatusCode};
use serde_json::{json, Value};

const REST_PREFIX: &str = "REST";
const SESSION_RESOURCE: &str = "Session";
const AUTH_TOKEN_HEADER: &str = "Auth-Token";

/// Session-oriented client for the DynECT REST API.
///
/// Owns the transport handle and the session token. Methods take `&mut self`,
/// so a client is driven by one caller at a time; share it behind a mutex or
/// give each worker its own instance.
///
/// Call [`DynectClient::close`] when done. Dropping a client that still holds
/// a token cannot log out (logout is async) and leaves the session open on the
/// server until it expires.
pub struct DynectClient {
    credentials: Credentials,
    options: ClientOptions,
    conn: Option<reqwest::Client>,
    token: Option<String>,
}

impl DynectClient {
    /// Creates a client without logging in.
    pub fn new(credentials: Credentials, options: ClientOptions) -> Self {
        Self {
            credentials,
            options,
            conn: None,
            token: None,
        }
    }

    /// Creates a client and logs in. Fails with the login error.
    pub async fn connect(credentials: Credentials, options: ClientOptions) -> Result<Self> {
        let mut client = Self::new(credentials, options);
        client.login().await?;
        Ok(client)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Sends one request to `/REST/{resource}/` and decodes the JSON reply.
    ///
    /// Any status other than 200 is a failure. `params` defaults to an empty
    /// JSON object built fresh for this call. Attaches the session token when
    /// one is held, but does not require it.
    pub async fn call(
        &mut self,
        method: Method,
        resource: &str,
        params: Option<&Value>,
    ) -> CallResult {
        debug!("{} {}", method, resource);
        let result = self.send(method, resource, params).await;

        if self.options.policy == ConnectionPolicy::PerCall {
            self.release();
        }

        if let Err(e) = &result {
            debug!("Request to {} failed: {}", resource, e);
        }
        result
    }

    async fn send(&mut self, method: Method, resource: &str, params: Option<&Value>) -> CallResult {
        let empty = json!({});
        let body = params.unwrap_or(&empty);
        let url = self.url(resource);
        let client = self.connection()?;

        let mut request = client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .json(body);
        if let Some(token) = &self.token {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(transport_error)?;

        if status != StatusCode::OK {
            return Err(CallError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                body: text,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| CallError::Decode(format!("{}. Response: {}", e, text)))
    }

    fn url(&self, resource: &str) -> String {
        let base = self.options.api_url.trim_end_matches('/');
        if resource.ends_with('/') {
            format!("{}/{}/{}", base, REST_PREFIX, resource)
        } else {
            format!("{}/{}/{}/", base, REST_PREFIX, resource)
        }
    }

    fn connection(&mut self) -> std::result::Result<reqwest::Client, CallError> {
        if let Some(conn) = &self.conn {
            return Ok(conn.clone());
        }

        let conn = reqwest::Client::builder()
            .connect_timeout(self.options.connect_timeout)
            .timeout(self.options.timeout)
            .build()
            .map_err(transport_error)?;
        self.conn = Some(conn.clone());
        Ok(conn)
    }

    fn release(&mut self) {
        self.conn = None;
    }

    async fn authenticated_call(
        &mut self,
        method: Method,
        resource: &str,
        params: Option<&Value>,
    ) -> Result<Value> {
        if self.token.is_none() {
            return Err(CallError::NotAuthenticated.into());
        }
        Ok(self.call(method, resource, params).await?)
    }

    pub async fn login(&mut self) -> Result<()> {
        let params = json!({
            "customer_name": self.credentials.customer_name,
            "user_name": self.credentials.user_name,
            "password": self.credentials.password,
        });
        let body = self.call(Method::POST, SESSION_RESOURCE, Some(&params)).await?;

        let token = body
            .pointer("/data/token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or(DynectError::MissingField("data.token"))?;
        self.token = Some(token.to_string());

        info!(
            "Logged in as {}/{}",
            self.credentials.customer_name, self.credentials.user_name
        );
        Ok(())
    }

    /// Extends the session lifetime on the server.
    pub async fn keepalive(&mut self) -> Result<()> {
        self.authenticated_call(Method::PUT, SESSION_RESOURCE, None)
            .await?;
        Ok(())
    }

    /// Ends the session. The token is cleared on success; the transport
    /// handle is released too when `autoclose` is set.
    pub async fn logout(&mut self, autoclose: bool) -> Result<()> {
        self.authenticated_call(Method::DELETE, SESSION_RESOURCE, None)
            .await?;
        self.token = None;
        info!("Logged out");

        if autoclose {
            self.release();
        }
        Ok(())
    }

    /// Logs out if a session is open, then releases the transport handle.
    ///
    /// The token is forgotten even when logout fails; the error is returned
    /// so the caller knows the server-side session may still be alive.
    pub async fn close(mut self) -> Result<()> {
        let result = if self.token.is_some() {
            self.logout(true).await
        } else {
            Ok(())
        };
        self.token = None;
        self.release();
        result
    }
}

/// Kind tag followed by the reqwest error and every `source()` below it.
fn transport_error(e: reqwest::Error) -> CallError {
    let kind = if e.is_timeout() {
        "timed out"
    } else if e.is_connect() {
        "connection failed"
    } else {
        "transport error"
    };

    let mut message = format!("{}: {}", kind, e);
    let mut source = std::error::Error::source(&e);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    CallError::Connection(message)
}

impl Drop for DynectClient {
    fn drop(&mut self) {
        if self.token.is_some() {
            warn!(
                "Session for {}/{} dropped without logout; call close() to end it",
                self.credentials.customer_name, self.credentials.user_name
            );
        }
    }
}

#[async_trait]
impl RecordApi for DynectClient {
    async fn publish_zone(&mut self, zone: &str) -> Result<Value> {
        let resource = format!("Zone/{}", zone);
        let body = self
            .authenticated_call(Method::PUT, &resource, Some(&json!({ "publish": true })))
            .await?;
        info!("Published zone {}", zone);
        Ok(body)
    }

    async fn create_a_record(
        &mut self,
        zone: &str,
        fqdn: &str,
        address: &str,
        ttl: u32,
    ) -> Result<Value> {
        let resource = RecordRef::new(zone, fqdn).resource();
        let params = json!({
            "rdata": { "address": address },
            "ttl": ttl.to_string(),
        });
        self.authenticated_call(Method::POST, &resource, Some(&params))
            .await
    }

    async fn read_a_record(
        &mut self,
        zone: &str,
        fqdn: &str,
        record_id: Option<&str>,
    ) -> Result<Value> {
        let mut record = RecordRef::new(zone, fqdn);
        if let Some(id) = record_id {
            record = record.with_id(id);
        }
        self.authenticated_call(Method::GET, &record.resource(), None)
            .await
    }

    async fn delete_a_record(&mut self, zone: &str, fqdn: &str, record_id: &str) -> Result<Value> {
        let resource = format!("{}/{}", RecordRef::new(zone, fqdn).resource(), record_id);
        self.authenticated_call(Method::DELETE, &resource, None)
            .await
    }
}
