use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of an account, as issued by the backing service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The parent business entity a payment belongs to.
///
/// Fetched once when the component mounts and held read-only for the
/// session; never mutated locally.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(id),
            name: name.into(),
        }
    }

    /// Projects the account into a selector option (label = name, value = id).
    pub fn to_option(&self) -> SelectOption {
        SelectOption {
            label: self.name.clone(),
            value: self.id.to_string(),
        }
    }
}

/// A label/value pair for a selector widget.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}
