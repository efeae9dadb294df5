use serde_json::{json, Map, Value};

use crate::error::Result;

use super::{Client, DEFAULT_SIZELIMIT};

impl Client {
    /// Enrolls a host with a one-time password it can later use to join the
    /// domain. `force` skips the DNS existence check.
    pub fn host_add(&self, hostname: &str, one_time_password: &str, force: bool) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("force".to_owned(), json!(force));
        options.insert("userpassword".to_owned(), json!(one_time_password));

        self.call("host_add", vec![json!(hostname)], self.versioned(options))
    }

    pub fn host_del(&self, hostname: &str) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));

        self.call("host_del", vec![json!(hostname)], self.versioned(options))
    }

    pub fn host_find(
        &self,
        hostname: Option<&str>,
        in_hostgroup: Option<&str>,
        sizelimit: Option<u32>,
    ) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("in_hostgroup".to_owned(), json!(in_hostgroup));
        options.insert(
            "sizelimit".to_owned(),
            json!(sizelimit.unwrap_or(DEFAULT_SIZELIMIT)),
        );

        self.call("host_find", vec![json!(hostname)], self.versioned(options))
    }

    pub fn host_mod(
        &self,
        hostname: &str,
        description: Option<&str>,
        locality: Option<&str>,
        location: Option<&str>,
        platform: Option<&str>,
        os_version: Option<&str>,
    ) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("description".to_owned(), json!(description));
        options.insert("locality".to_owned(), json!(locality));
        options.insert("nshostlocation".to_owned(), json!(location));
        options.insert("nshardwareplatform".to_owned(), json!(platform));
        options.insert("nsosversion".to_owned(), json!(os_version));

        self.call("host_mod", vec![json!(hostname)], self.versioned(options))
    }

    pub fn host_show(&self, hostname: &str) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));

        self.call("host_show", vec![json!(hostname)], self.versioned(options))
    }

    pub fn hostgroup_add(&self, hostgroup: &str, description: Option<&str>) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));
        options.insert("description".to_owned(), json!(description));

        self.call("hostgroup_add", vec![json!(hostgroup)], self.versioned(options))
    }

    pub fn hostgroup_add_member(&self, hostgroup: &str, hosts: &[&str]) -> Result<Value> {
        let mut options = Map::new();
        options.insert("host".to_owned(), json!(hosts));
        options.insert("all".to_owned(), json!(true));

        self.call(
            "hostgroup_add_member",
            vec![json!(hostgroup)],
            self.versioned(options),
        )
    }

    pub fn hostgroup_show(&self, hostgroup: &str) -> Result<Value> {
        let mut options = Map::new();
        options.insert("all".to_owned(), json!(true));

        self.call("hostgroup_show", vec![json!(hostgroup)], self.versioned(options))
    }
}
