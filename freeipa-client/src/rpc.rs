use std::path::PathBuf;

use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// TLS verification policy for the connection to the IPA server.
#[derive(Debug, Clone)]
pub enum SslVerify {
    /// Verify the server certificate against the system trust store.
    Enabled,
    /// Accept any certificate. For lab setups with the self-signed IPA CA.
    Disabled,
    /// Verify against the trust anchors in a PEM bundle, typically
    /// `/etc/ipa/ca.crt`.
    CaBundle(PathBuf),
}

/// The JSON-RPC envelope posted to `{ipa_url}/session/json`.
///
/// `id` is always the literal 0; requests are strictly sequential on one
/// session, so id-based response matching is not supported.
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    pub id: u32,
    pub method: String,
    pub params: (Vec<Value>, Map<String, Value>),
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, item: Vec<Value>, options: Map<String, Value>) -> Self {
        Self {
            id: 0,
            method: method.into(),
            params: (item, options),
        }
    }
}

/// Owns the HTTP connection and the cookie jar holding the session cookie.
pub struct RpcClient {
    http: HttpClient,
    ipa_url: String,
}

impl RpcClient {
    pub fn new(ipa_url: String, sslverify: &SslVerify) -> Result<Self> {
        let mut builder = HttpClient::builder().cookie_store(true);
        match sslverify {
            SslVerify::Enabled => {}
            SslVerify::Disabled => builder = builder.danger_accept_invalid_certs(true),
            SslVerify::CaBundle(path) => {
                let pem = std::fs::read(path).map_err(|source| Error::CaBundle {
                    path: path.clone(),
                    source,
                })?;
                for cert in reqwest::Certificate::from_pem_bundle(&pem)? {
                    builder = builder.add_root_certificate(cert);
                }
            }
        }

        Ok(Self {
            http: builder.build()?,
            ipa_url,
        })
    }

    pub fn url(&self) -> &str {
        &self.ipa_url
    }

    /// Form-encoded POST to the password login endpoint. Status handling is
    /// up to the caller; only transport faults error here.
    pub fn login_password(&self, user: &str, password: &str) -> Result<Response> {
        let url = format!("{}/session/login_password", self.ipa_url);

        let rv = self
            .http
            .post(&url)
            .header(header::REFERER, &self.ipa_url)
            .header(header::ACCEPT, "text/plain")
            .form(&[("user", user), ("password", password)])
            .send()?;

        Ok(rv)
    }

    /// Posts one JSON-RPC envelope over the session and returns the decoded
    /// body verbatim, whatever the HTTP status. FreeIPA reports its own
    /// errors inside the body; interpreting them is the caller's business.
    pub fn call(&self, method: &str, item: Vec<Value>, options: Map<String, Value>) -> Result<Value> {
        let url = format!("{}/session/json", self.ipa_url);
        let request = RpcRequest::new(method, item, options);

        debug!("making {} request to {}", request.method, url);

        let rv = self
            .http
            .post(&url)
            .header(header::REFERER, &self.ipa_url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(serde_json::to_string(&request)?)
            .send()?;

        Ok(serde_json::from_str(&rv.text()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_has_the_fixed_wire_shape() {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("sizelimit".to_owned(), json!(40000));
        let request = RpcRequest::new("group_find", vec![Value::Null], options);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "id": 0,
                "method": "group_find",
                "params": [[null], {"all": true, "sizelimit": 40000}]
            }),
        );
    }

    #[test]
    fn envelope_id_is_always_zero() {
        let request = RpcRequest::new("user_show", vec![json!("alice")], Map::new());
        assert_eq!(serde_json::to_value(&request).unwrap()["id"], json!(0));
    }

    #[test]
    fn empty_item_and_options_serialize_as_empty_containers() {
        let request = RpcRequest::new("ping", Vec::new(), Map::new());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"id": 0, "method": "ping", "params": [[], {}]}),
        );
    }
}
