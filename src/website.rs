use serde::{Deserialize, Serialize};

/// A row of the `websites` table.
///
/// `id` is assigned by the store and stays `0` until the value has been created.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub rank: i64,
}

impl Website {
    /// Create a website that has not been stored yet
    pub fn new(name: impl Into<String>, url: impl Into<String>, rank: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            url: url.into(),
            rank,
        }
    }

    /// Return the same website carrying the given id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
