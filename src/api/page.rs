//! Paginated response envelope
//!
//! List endpoints answer with `{results, next, previous, count}`. Some of the
//! older endpoints return a bare array instead; both shapes decode into a
//! `Page`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub count: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            next: None,
            previous: None,
            count: 0,
        }
    }

    /// Check if there are more results available
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode either an envelope or a bare array
    pub fn from_json(json: Value) -> anyhow::Result<Self> {
        match json {
            Value::Array(_) => {
                let results: Vec<T> = serde_json::from_value(json)?;
                let count = results.len() as u64;
                Ok(Self {
                    results,
                    next: None,
                    previous: None,
                    count,
                })
            }
            Value::Object(ref map) if map.contains_key("results") => {
                Ok(serde_json::from_value(json)?)
            }
            _ => anyhow::bail!("Missing or invalid 'results' array in response"),
        }
    }
}
