//! Wire payloads for the string endpoints.
//!
//! Request fields default to their zero value when absent, so `{}` decodes
//! as an empty string. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Body of `/uppercase`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UppercaseRequest {
    #[serde(rename = "str")]
    pub input: String,
}

/// Result of `/uppercase`. An empty `err` signals success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UppercaseResponse {
    #[serde(rename = "str")]
    pub output: String,
    pub err: String,
}

impl UppercaseResponse {
    pub fn success(output: String) -> Self {
        Self {
            output,
            err: String::new(),
        }
    }

    pub fn failure(err: impl ToString) -> Self {
        Self {
            output: String::new(),
            err: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.err.is_empty()
    }
}

/// Body of `/count`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountRequest {
    #[serde(rename = "str")]
    pub input: String,
}

/// Result of `/count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
}
