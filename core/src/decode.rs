//! Envelope decoder for OpenSecrets JSON responses.
//!
//! Every response is wrapped as
//!
//! ```text
//! { "response": { "<resource>": <node> } }
//! ```
//!
//! where `<node>` is an `{"@attributes": {...}}` object, a list of them, or an
//! object whose attributes sit next to one or more child lists. The upstream
//! JSON is machine-translated from XML, which is why scalars are nested one
//! level down and why numbers arrive as strings.
//!
//! # Rules
//! - Bytes that are not JSON fail.
//! - A missing key or a `null`, at any level down to a single attribute,
//!   yields zero values or an empty list.
//! - A key present with the wrong JSON type fails.
//! - A numeric field holding anything but a string in JSON number syntax
//!   fails (`"NaN"`, `"inf"`, `"+5"` and `" 5"` included).
//!
//! Any failure becomes [`ApiError::Decode`]; no partial record escapes.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::ApiError;

const ATTRIBUTES: &str = "@attributes";

static NULL: Value = Value::Null;

/// Deserialize a number transmitted as a JSON string.
///
/// `null` yields the zero value. A bare JSON number, an empty string or any
/// text outside the JSON number grammar is an error.
pub fn wire_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => {
            // Only JSON number literals count; `str::parse` alone would take
            // `NaN`, `inf` and `+5`.
            serde_json::from_str::<serde_json::Number>(&raw).map_err(de::Error::custom)?;
            raw.parse().map_err(de::Error::custom)
        }
        None => Ok(T::default()),
    }
}

/// The resource node of one response, unwrapped from `response`.
#[derive(Debug, Clone)]
pub struct Envelope {
    resource: Value,
}

impl Envelope {
    /// Parse `body` and keep the node stored under `response.<resource>`.
    pub fn parse(body: &[u8], resource: &str) -> Result<Self, ApiError> {
        let root: Value = serde_json::from_slice(body).map_err(|_| ApiError::Decode)?;
        let response = member(&root, "response")?;
        let resource = member(response, resource)?.clone();
        Ok(Self { resource })
    }

    /// Decode the resource node as a single `@attributes` record.
    pub fn attributes<T: DeserializeOwned + Default>(&self) -> Result<T, ApiError> {
        attributes(&self.resource)
    }

    /// Decode the resource node as a list of `@attributes` records.
    pub fn list<T: DeserializeOwned + Default>(&self) -> Result<Vec<T>, ApiError> {
        list(&self.resource)
    }

    /// Decode the list found by walking `path` from the resource node.
    ///
    /// A missing key anywhere along the path yields an empty list.
    pub fn children<T: DeserializeOwned + Default>(
        &self,
        path: &[&str],
    ) -> Result<Vec<T>, ApiError> {
        let node = path
            .iter()
            .try_fold(&self.resource, |node, key| member(node, key))?;
        list(node)
    }
}

fn member<'a>(node: &'a Value, key: &str) -> Result<&'a Value, ApiError> {
    match node {
        Value::Null => Ok(&NULL),
        Value::Object(map) => Ok(map.get(key).unwrap_or(&NULL)),
        _ => Err(ApiError::Decode),
    }
}

fn attributes<T: DeserializeOwned + Default>(node: &Value) -> Result<T, ApiError> {
    match member(node, ATTRIBUTES)? {
        Value::Null => Ok(T::default()),
        Value::Object(attrs) => {
            // A `null` attribute reads as absent, so `#[serde(default)]` fills it.
            let present: Map<String, Value> = attrs
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            T::deserialize(Value::Object(present)).map_err(|_| ApiError::Decode)
        }
        _ => Err(ApiError::Decode),
    }
}

fn list<T: DeserializeOwned + Default>(node: &Value) -> Result<Vec<T>, ApiError> {
    match node {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(attributes).collect(),
        _ => Err(ApiError::Decode),
    }
}
