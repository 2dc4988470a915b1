// viewer-response event contract of the edge runtime
//
// the runtime hands the function an event whose `response.headers` maps
// lowercase header names to `{ "value": ... }` descriptors and expects the
// (mutated) response back. everything else on the event is opaque.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::PolicyError;
use crate::policy::{self, HeaderTarget};

/// header name -> entry, keyed by lowercase name
pub type Headers = BTreeMap<String, HeaderEntry>;

/// a single header entry as the runtime represents it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeaderDescriptor {
    pub value: String,
    /// anything else the runtime attached, e.g. `multiValue`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HeaderDescriptor {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            extra: Map::new(),
        }
    }
}

/// an entry in the header mapping. entries that are not `{ "value": string }`
/// are kept verbatim so they pass through untouched
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum HeaderEntry {
    Descriptor(HeaderDescriptor),
    Raw(Value),
}

impl HeaderEntry {
    pub fn value(&self) -> Option<&str> {
        match self {
            HeaderEntry::Descriptor(descriptor) => Some(&descriptor.value),
            HeaderEntry::Raw(_) => None,
        }
    }
}

impl From<HeaderDescriptor> for HeaderEntry {
    fn from(descriptor: HeaderDescriptor) -> Self {
        HeaderEntry::Descriptor(descriptor)
    }
}

/// the response half of a viewer-response event.
/// only the header mapping has a required shape
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct EdgeResponse {
    pub headers: Headers,
    /// status, cookies, body and whatever else the runtime sends along
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EdgeResponse {
    /// `statusCode`, when the runtime sent a number that fits
    pub fn status_code(&self) -> Option<u16> {
        self.extra
            .get("statusCode")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
    }
}

/// the full event passed to the function
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ViewerResponseEvent {
    pub response: EdgeResponse,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ViewerResponseEvent {
    /// decode a raw event, rejecting anything outside the contract
    pub fn from_value(event: Value) -> Result<Self, PolicyError> {
        serde_json::from_value(event).map_err(|e| PolicyError::invalid(e.to_string()))
    }
}

impl HeaderTarget for Headers {
    fn overwrite(&mut self, name: &'static str, value: &'static str) {
        // the whole descriptor is replaced, extra fields included
        self.insert(name.to_string(), HeaderDescriptor::new(value).into());
    }
}

impl HeaderTarget for Map<String, Value> {
    fn overwrite(&mut self, name: &'static str, value: &'static str) {
        self.insert(name.to_string(), json!({ "value": value }));
    }
}

/// apply the policy to a typed response, returning it
pub fn apply(mut response: EdgeResponse) -> EdgeResponse {
    policy::apply(&mut response.headers);
    response
}

/// apply the policy in place to a raw response value.
/// fails when the value has no writable `headers` object
pub fn apply_value(response: &mut Value) -> Result<(), PolicyError> {
    let headers = response
        .as_object_mut()
        .ok_or_else(|| PolicyError::invalid("response is not an object"))?
        .get_mut("headers")
        .ok_or_else(|| PolicyError::invalid("response has no headers"))?
        .as_object_mut()
        .ok_or_else(|| PolicyError::invalid("response headers are not an object"))?;

    policy::apply(headers);
    Ok(())
}

/// edge function entry point: take the whole event, return the mutated response.
/// every field other than the managed headers passes through untouched
pub fn handler(mut event: Value) -> Result<Value, PolicyError> {
    let mut response = event
        .as_object_mut()
        .ok_or_else(|| PolicyError::invalid("event is not an object"))?
        .remove("response")
        .ok_or_else(|| PolicyError::invalid("event has no response"))?;

    apply_value(&mut response)?;
    Ok(response)
}
