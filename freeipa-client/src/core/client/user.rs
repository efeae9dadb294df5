use serde_json::{json, Map, Value};

use crate::error::Result;

use super::{Client, DEFAULT_SIZELIMIT};

impl Client {
    /// Creates a user. `opts` carries the account attributes (`givenname`,
    /// `sn`, `mail`, ...) straight into the request options.
    pub fn user_add(&self, user: &str, mut opts: Map<String, Value>) -> Result<Value> {
        opts.insert("all".to_owned(), json!(true));

        self.call("user_add", vec![json!(user)], self.versioned(opts))
    }

    /// Searches users. Caller `attrs` are merged over the defaults and win
    /// on conflict.
    pub fn user_find(
        &self,
        user: Option<&str>,
        attrs: Map<String, Value>,
        sizelimit: Option<u32>,
    ) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("no_members".to_owned(), json!(false));
        options.insert(
            "sizelimit".to_owned(),
            json!(sizelimit.unwrap_or(DEFAULT_SIZELIMIT)),
        );
        options.insert("whoami".to_owned(), json!(false));
        options.extend(attrs);

        self.call("user_find", vec![json!(user)], self.versioned(options))
    }

    pub fn user_show(&self, user: &str) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("raw".to_owned(), json!(false));

        self.call("user_show", vec![json!(user)], self.versioned(options))
    }

    pub fn user_status(&self, user: &str) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("raw".to_owned(), json!(false));

        self.call("user_status", vec![json!(user)], self.versioned(options))
    }

    pub fn user_unlock(&self, user: &str) -> Result<Value> {
        self.call("user_unlock", vec![json!(user)], self.versioned(Map::new()))
    }

    pub fn user_disable(&self, user: &str) -> Result<Value> {
        self.call("user_disable", vec![json!(user)], self.versioned(Map::new()))
    }

    pub fn user_mod(
        &self,
        user: &str,
        addattrs: &[&str],
        setattrs: &[&str],
        delattrs: &[&str],
    ) -> Result<Value> {
        self.call(
            "user_mod",
            vec![json!(user)],
            self.mod_options(addattrs, setattrs, delattrs),
        )
    }

    /// Deletes a user; with `preserve` the entry is moved to the preserved
    /// container instead of being removed outright.
    pub fn user_del(&self, user: &str, preserve: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("continue".to_owned(), json!(false));
        options.insert("preserve".to_owned(), json!(preserve));

        self.call("user_del", vec![json!(user)], self.versioned(options))
    }
}
