use serde_json::{json, Map, Value};

use crate::error::Result;

use super::Client;

impl Client {
    /// Creates an automember rule for the given target group; `rule_type`
    /// is `group` or `hostgroup`.
    pub fn automember_add(
        &self,
        name: &str,
        description: Option<&str>,
        rule_type: &str,
    ) -> Result<Value> {
        let mut options = Map::new();
        options.insert("type".to_owned(), json!(rule_type));
        options.insert("all".to_owned(), json!(true));
        options.insert("raw".to_owned(), json!(false));
        if let Some(description) = description {
            options.insert("description".to_owned(), json!(description));
        }

        self.call("automember_add", vec![json!(name)], self.versioned(options))
    }

    /// Adds an attribute-matching condition to an automember rule. `key` is
    /// the attribute the regexes match against, e.g. `fqdn` or `uid`.
    pub fn automember_add_condition(
        &self,
        name: &str,
        key: &str,
        rule_type: &str,
        inclusive_regex: Option<&str>,
        exclusive_regex: Option<&str>,
    ) -> Result<Value> {
        let mut options = Map::new();
        options.insert("key".to_owned(), json!(key));
        options.insert("type".to_owned(), json!(rule_type));
        options.insert("all".to_owned(), json!(true));
        options.insert("raw".to_owned(), json!(false));
        if let Some(regex) = inclusive_regex {
            options.insert("automemberinclusiveregex".to_owned(), json!(regex));
        }
        if let Some(regex) = exclusive_regex {
            options.insert("automemberexclusiveregex".to_owned(), json!(regex));
        }

        self.call(
            "automember_add_condition",
            vec![json!(name)],
            self.versioned(options),
        )
    }
}
