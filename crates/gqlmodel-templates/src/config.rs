use serde::Deserialize;

/// Parameters substituted into generated mapping templates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page size of list queries and list connections when the caller does
    /// not pass `limit`
    pub list_limit: u32,

    /// Page size of sync queries when the caller does not pass `limit`
    pub sync_limit: u32,

    /// Key looked up by a singular connection whose foreign key is unset,
    /// chosen so that it matches no item
    pub missing_key_sentinel: String,

    /// Prefix of secondary index names
    pub index_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_limit: 10,
            sync_limit: 100,
            missing_key_sentinel: "___xamznone____".to_string(),
            index_prefix: "gsi-".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default list page size
    pub fn list_limit(mut self, limit: u32) -> Self {
        self.list_limit = limit;
        self
    }

    /// Set the default sync page size
    pub fn sync_limit(mut self, limit: u32) -> Self {
        self.sync_limit = limit;
        self
    }

    /// Set the key used when a singular connection has no foreign key
    pub fn missing_key_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.missing_key_sentinel = sentinel.into();
        self
    }

    /// Set the secondary index name prefix
    pub fn index_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.index_prefix = prefix.into();
        self
    }

    pub(crate) fn index_name(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.index_prefix)
    }
}
