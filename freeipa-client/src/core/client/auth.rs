use reqwest::blocking::Response;
use reqwest::StatusCode;
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::error::Result;

use super::Client;

impl Client {
    /// Logs `user` in over the form-based password login endpoint and
    /// retains the session cookie set by the server.
    ///
    /// A non-200 answer means the server rejected the credentials: the
    /// session is left as it was, nothing is recorded and `None` comes
    /// back. Only transport faults are errors.
    pub fn login(&mut self, user: &str, password: &str) -> Result<Option<Response>> {
        let rv = self.rpc.login_password(user, password)?;

        if rv.status() != StatusCode::OK {
            warn!("failed to log {} in to {}", user, self.rpc.url());
            return Ok(None);
        }

        info!("successfully logged in as {}", user);
        // kept for use when changing the password for self
        self.login_user = Some(user.to_owned());
        Ok(Some(rv))
    }

    /// Sets `principal`'s password. Changing the password of anyone but the
    /// logged-in principal requires the magic extra positional item.
    pub fn passwd(&self, principal: &str, password: &str) -> Result<Value> {
        let mut item = vec![json!(principal), json!(password)];
        let user = principal.split('@').next().unwrap_or(principal);
        if self.login_user.as_deref() != Some(user) {
            item.push(json!("CHANGING_PASSWORD_FOR_ANOTHER_USER"));
        }

        self.call("passwd", item, self.versioned(Map::new()))
    }

    /// Adds a self-service permission letting users manage the given
    /// attributes on their own entry.
    pub fn selfservice_add(
        &self,
        aciname: &str,
        attrs: &[&str],
        permissions: Option<&[&str]>,
    ) -> Result<Value> {
        let mut options = Map::new();
        options.insert("attrs".to_owned(), json!(attrs));
        options.insert("all".to_owned(), json!(true));
        options.insert("raw".to_owned(), json!(false));
        if let Some(permissions) = permissions {
            options.insert("permissions".to_owned(), json!(permissions));
        }

        self.call("selfservice_add", vec![json!(aciname)], self.versioned(options))
    }
}
