use std::str::FromStr;

use serde_json::{json, Map, Value};

use crate::error::{Error, Result};

use super::{Client, DEFAULT_SIZELIMIT};

/// What a group member reference names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberType {
    User,
    Group,
}

impl MemberType {
    fn key(self) -> &'static str {
        match self {
            MemberType::User => "user",
            MemberType::Group => "group",
        }
    }
}

impl FromStr for MemberType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(MemberType::User),
            "group" => Ok(MemberType::Group),
            other => Err(Error::InvalidMemberType(other.to_owned())),
        }
    }
}

impl Client {
    pub fn group_add(
        &self,
        group: &str,
        gidnumber: Option<u32>,
        description: Option<&str>,
    ) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("description".to_owned(), json!(description));
        if let Some(gidnumber) = gidnumber {
            options.insert("gidnumber".to_owned(), json!(gidnumber));
        }

        self.call("group_add", vec![json!(group)], self.versioned(options))
    }

    /// Adds `member` to `group`. `membertype` must name `user` or `group`;
    /// anything else fails before any network I/O.
    pub fn group_add_member(&self, group: &str, member: &str, membertype: &str) -> Result<Value> {
        let membertype: MemberType = membertype.parse()?;

        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("raw".to_owned(), json!(true));
        options.insert(membertype.key().to_owned(), json!(member));

        self.call("group_add_member", vec![json!(group)], self.versioned(options))
    }

    pub fn group_remove_member(&self, group: &str, users: &[&str]) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(false));
        options.insert("no_members".to_owned(), json!(false));
        options.insert("raw".to_owned(), json!(false));
        options.insert("user".to_owned(), json!(users));

        self.call("group_remove_member", vec![json!(group)], self.versioned(options))
    }

    pub fn group_find(&self, group: Option<&str>, sizelimit: Option<u32>) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert(
            "sizelimit".to_owned(),
            json!(sizelimit.unwrap_or(DEFAULT_SIZELIMIT)),
        );

        self.call("group_find", vec![json!(group)], self.versioned(options))
    }

    pub fn group_show(&self, group: &str) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("raw".to_owned(), json!(false));

        self.call("group_show", vec![json!(group)], self.versioned(options))
    }

    pub fn group_mod(
        &self,
        group: &str,
        addattrs: &[&str],
        setattrs: &[&str],
        delattrs: &[&str],
    ) -> Result<Value> {
        self.call(
            "group_mod",
            vec![json!(group)],
            self.mod_options(addattrs, setattrs, delattrs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_type_parses_user_and_group() {
        assert_eq!("user".parse::<MemberType>().unwrap(), MemberType::User);
        assert_eq!("group".parse::<MemberType>().unwrap(), MemberType::Group);
    }

    #[test]
    fn member_type_rejects_anything_else() {
        assert!(matches!(
            "host".parse::<MemberType>(),
            Err(Error::InvalidMemberType(t)) if t == "host"
        ));
    }
}
