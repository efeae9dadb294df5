use serde_json::{json, Map, Value};

use crate::error::Result;

use super::{Client, DEFAULT_SIZELIMIT};

impl Client {
    pub fn stageuser_find(
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
        options.extend(attrs);

        self.call("stageuser_find", vec![json!(user)], self.versioned(options))
    }

    pub fn stageuser_add(
        &self,
        user: &str,
        mut opts: Map<String, Value>,
        addattrs: Option<&[&str]>,
        setattrs: Option<&[&str]>,
    ) -> Result<Value> {
        opts.insert("all".to_owned(), json!(false));
        if let Some(addattrs) = addattrs {
            opts.insert("addattr".to_owned(), json!(addattrs));
        }
        if let Some(setattrs) = setattrs {
            opts.insert("setattr".to_owned(), json!(setattrs));
        }

        self.call("stageuser_add", vec![json!(user)], self.versioned(opts))
    }

    pub fn stageuser_del(&self, user: &str) -> Result<Value> {
        self.call("stageuser_del", vec![json!(user)], self.versioned(Map::new()))
    }

    pub fn stageuser_mod(
        &self,
        user: &str,
        addattrs: &[&str],
        setattrs: &[&str],
        delattrs: &[&str],
    ) -> Result<Value> {
        self.call(
            "stageuser_mod",
            vec![json!(user)],
            self.mod_options(addattrs, setattrs, delattrs),
        )
    }

    /// Turns a stage user into an active account.
    pub fn stageuser_activate(&self, user: &str) -> Result<Value> {
        self.call(
            "stageuser_activate",
            vec![json!(user)],
            self.versioned(Map::new()),
        )
    }
}
