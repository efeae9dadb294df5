use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::rpc::{RpcClient, SslVerify};

mod auth;
mod automember;
mod group;
mod host;
mod stageuser;
mod user;

pub use group::MemberType;

/// Default `sizelimit` sent by the `*_find` methods.
pub const DEFAULT_SIZELIMIT: u32 = 40_000;

/// One authenticated session against one FreeIPA server.
///
/// Configuration (server URL, TLS policy, API version) is fixed at
/// construction; the only mutable state is the session itself, owned by
/// [`Client::login`]. Calls block the current thread and are not
/// synchronized, serialize access externally if the client is shared.
pub struct Client {
    rpc: RpcClient,
    api_version: Option<String>,
    login_user: Option<String>,
}

impl Client {
    /// Connects to `https://{server}/ipa`.
    pub fn new(server: &str, sslverify: SslVerify) -> Result<Self> {
        Self::from_url(format!("https://{}/ipa", server), sslverify)
    }

    /// Builds a client against an explicit IPA base URL, for deployments not
    /// reachable as `https://{server}/ipa`.
    pub fn from_url(ipa_url: impl Into<String>, sslverify: SslVerify) -> Result<Self> {
        Ok(Self {
            rpc: RpcClient::new(ipa_url.into(), &sslverify)?,
            api_version: None,
            login_user: None,
        })
    }

    /// Sets the API version the entity methods send as their `version`
    /// option. Without one the server processes calls anyway and answers
    /// with a version-missing warning.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// The principal recorded by the last successful [`Client::login`].
    pub fn principal(&self) -> Option<&str> {
        self.login_user.as_deref()
    }

    /// Raw JSON-RPC dispatch: posts `{id: 0, method, params: [item, options]}`
    /// over the current session and returns the decoded response verbatim.
    /// `options` is sent exactly as given, the configured API version is not
    /// injected here.
    pub fn call(&self, method: &str, item: Vec<Value>, options: Map<String, Value>) -> Result<Value> {
        self.rpc.call(method, item, options)
    }

    pub fn config_show(&self) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        self.call("config_show", vec![Value::Null], self.versioned(options))
    }

    /// Injects the configured API version, leaving an explicit `version`
    /// option untouched.
    fn versioned(&self, mut options: Map<String, Value>) -> Map<String, Value> {
        if let Some(version) = &self.api_version {
            options.entry("version").or_insert_with(|| json!(version));
        }
        options
    }

    /// Shared options of the `*_mod` methods. Empty attribute lists are left
    /// out of the request entirely.
    fn mod_options(
        &self,
        addattrs: &[&str],
        setattrs: &[&str],
        delattrs: &[&str],
    ) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(false));
        options.insert("no_members".to_owned(), json!(false));
        options.insert("raw".to_owned(), json!(false));
        options.insert("rights".to_owned(), json!(false));
        if !addattrs.is_empty() {
            options.insert("addattr".to_owned(), json!(addattrs));
        }
        if !setattrs.is_empty() {
            options.insert("setattr".to_owned(), json!(setattrs));
        }
        if !delattrs.is_empty() {
            options.insert("delattr".to_owned(), json!(delattrs));
        }
        self.versioned(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> Client {
        Client::from_url("http://ipa.test/ipa", SslVerify::Enabled).unwrap()
    }

    #[test]
    fn versioned_is_a_noop_without_a_configured_version() {
        let client = offline_client();
        assert!(client.versioned(Map::new()).is_empty());
    }

    #[test]
    fn versioned_injects_the_configured_version() {
        let client = offline_client().with_api_version("2.251");
        let options = client.versioned(Map::new());
        assert_eq!(options.get("version"), Some(&json!("2.251")));
    }

    #[test]
    fn versioned_respects_an_explicit_version() {
        let client = offline_client().with_api_version("2.251");
        let mut options = Map::new();
        options.insert("version".to_owned(), json!("2.112"));
        assert_eq!(
            client.versioned(options).get("version"),
            Some(&json!("2.112")),
        );
    }

    #[test]
    fn mod_options_omits_empty_attribute_lists() {
        let client = offline_client();
        let options = client.mod_options(&[], &[], &[]);
        assert!(!options.contains_key("addattr"));
        assert!(!options.contains_key("setattr"));
        assert!(!options.contains_key("delattr"));

        let options = client.mod_options(&["description=ops"], &[], &["gecos"]);
        assert_eq!(options.get("addattr"), Some(&json!(["description=ops"])));
        assert!(!options.contains_key("setattr"));
        assert_eq!(options.get("delattr"), Some(&json!(["gecos"])));
    }
}
