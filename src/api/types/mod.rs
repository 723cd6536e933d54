// lakeFS Rust Client for Version-Controlled Object Storage
// Copyright 2025 The lakeFS Rust Client Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core types shared by every operation
//!
//! An endpoint is described by a static [`OperationDescriptor`]; the values of
//! one invocation are collected in [`CallParams`].

pub mod request;
pub mod traits;

pub use request::{ApiRequest, RequestBody};
pub use traits::{ApiOperation, ToPendingCall};

use crate::api::auth::AuthScheme;
use crate::api::multimap_ext::{Multimap, MultimapExt};
use crate::api::utils::{UtcTime, to_rfc3339};
use bytes::Bytes;
use http::{Method, StatusCode};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Where a parameter is placed on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Header,
    Cookie,
    Form,
    Body,
}

/// Wire convention for multi-valued parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollectionFormat {
    /// Comma separated
    #[default]
    Csv,
    /// Space separated
    Ssv,
    /// Tab separated
    Tsv,
    /// Pipe separated
    Pipes,
    /// One occurrence per element
    Multi,
}

impl CollectionFormat {
    /// Delimiter of the joined formats; `None` for [`CollectionFormat::Multi`]
    pub fn delimiter(&self) -> Option<&'static str> {
        match self {
            CollectionFormat::Csv => Some(","),
            CollectionFormat::Ssv => Some(" "),
            CollectionFormat::Tsv => Some("\t"),
            CollectionFormat::Pipes => Some("|"),
            CollectionFormat::Multi => None,
        }
    }
}

/// Declaration of one operation parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    /// Wire name
    pub name: &'static str,
    pub location: ParamLocation,
    pub required: bool,
    pub collection_format: CollectionFormat,
    /// Default the server applies when the parameter is absent. Informational
    /// only; the client never sends it.
    pub server_default: Option<&'static str>,
}

impl ParamSpec {
    const fn new(name: &'static str, location: ParamLocation) -> Self {
        ParamSpec {
            name,
            location,
            required: false,
            collection_format: CollectionFormat::Csv,
            server_default: None,
        }
    }

    /// Path parameters are always required
    pub const fn path(name: &'static str) -> Self {
        ParamSpec::new(name, ParamLocation::Path).required()
    }

    pub const fn query(name: &'static str) -> Self {
        ParamSpec::new(name, ParamLocation::Query)
    }

    pub const fn header(name: &'static str) -> Self {
        ParamSpec::new(name, ParamLocation::Header)
    }

    pub const fn cookie(name: &'static str) -> Self {
        ParamSpec::new(name, ParamLocation::Cookie)
    }

    pub const fn form(name: &'static str) -> Self {
        ParamSpec::new(name, ParamLocation::Form)
    }

    pub const fn body(name: &'static str) -> Self {
        ParamSpec::new(name, ParamLocation::Body)
    }

    pub const fn required(self) -> Self {
        ParamSpec {
            required: true,
            ..self
        }
    }

    pub const fn collection(self, collection_format: CollectionFormat) -> Self {
        ParamSpec {
            collection_format,
            ..self
        }
    }

    pub const fn server_default(self, value: &'static str) -> Self {
        ParamSpec {
            server_default: Some(value),
            ..self
        }
    }
}

/// Static description of one endpoint
#[derive(Debug)]
pub struct OperationDescriptor {
    /// Operation identifier, used in error messages and logs
    pub operation_id: &'static str,
    pub method: Method,
    /// Path template relative to the base URL, with `{name}` placeholders
    pub path: &'static str,
    /// Declared parameters in order
    pub params: &'static [ParamSpec],
    /// Response media types the endpoint can produce, in preference order
    pub accepts: &'static [&'static str],
    /// Request media types the endpoint accepts, in preference order
    pub content_types: &'static [&'static str],
    /// Authentication schemes the endpoint accepts
    pub auth: &'static [AuthScheme],
    /// Status codes treated as success
    pub success: RangeInclusive<u16>,
}

impl OperationDescriptor {
    /// Default success range
    pub const SUCCESS: RangeInclusive<u16> = 200..=299;

    /// Looks up a declared parameter by wire name
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn is_success(&self, status: StatusCode) -> bool {
        self.success.contains(&status.as_u16())
    }
}

/// Scalar types that can be used as parameter values
pub trait ParamScalar {
    fn to_param_string(&self) -> String;
}

macro_rules! impl_param_scalar_display {
    ($($t:ty),*) => {
        $(
            impl ParamScalar for $t {
                fn to_param_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_param_scalar_display!(
    String, &str, &String, bool, char, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64
);

impl ParamScalar for UtcTime {
    fn to_param_string(&self) -> String {
        to_rfc3339(*self)
    }
}

/// Value of one parameter
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    /// Elements of the value; a single value has one element
    pub fn elements(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(v) => vec![v.as_str()],
            ParamValue::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }

    /// The value as one string, list elements comma separated
    pub fn joined(&self) -> String {
        match self {
            ParamValue::Single(v) => v.clone(),
            ParamValue::Multiple(v) => v.join(","),
        }
    }
}

impl<T: ParamScalar> From<T> for ParamValue {
    fn from(v: T) -> Self {
        ParamValue::Single(v.to_param_string())
    }
}

impl<T: ParamScalar> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        ParamValue::Multiple(v.iter().map(ParamScalar::to_param_string).collect())
    }
}

/// File part of a multipart form
#[derive(Clone, Debug)]
pub struct FormFile {
    pub file_name: String,
    /// Media type of the part, `application/octet-stream` when unset
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl FormFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        FormFile {
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Request body before serialization
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// Structured value, serialized according to the negotiated content type
    Structured(serde_json::Value),
    /// Opaque bytes, sent as-is
    Bytes(Bytes),
}

impl Payload {
    /// Captures any serializable value
    pub fn from_serialize<T: serde::Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Payload::Structured(serde_json::to_value(value)?))
    }
}

impl From<serde_json::Value> for Payload {
    fn from(v: serde_json::Value) -> Self {
        Payload::Structured(v)
    }
}

impl From<Bytes> for Payload {
    fn from(v: Bytes) -> Self {
        Payload::Bytes(v)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(v: Vec<u8>) -> Self {
        Payload::Bytes(Bytes::from(v))
    }
}

/// Values of one invocation, keyed by wire name.
///
/// Optional parameters that are not set are omitted from the request.
#[derive(Clone, Debug, Default)]
pub struct CallParams {
    pub(crate) values: HashMap<String, ParamValue>,
    pub(crate) files: HashMap<String, FormFile>,
    pub(crate) body: Option<Payload>,
    pub(crate) extra_headers: Multimap,
    pub(crate) extra_query: Multimap,
}

impl CallParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value to a declared parameter
    pub fn set<V: Into<ParamValue>>(mut self, name: &str, value: V) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Binds a value when present; `None` leaves the parameter unset
    pub fn set_opt<V: Into<ParamValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    /// Binds a file to a declared form parameter
    pub fn file(mut self, name: &str, file: FormFile) -> Self {
        self.files.insert(name.to_string(), file);
        self
    }

    pub fn body<P: Into<Payload>>(mut self, body: P) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a header that the operation does not declare
    pub fn extra_header(mut self, name: &str, value: &str) -> Self {
        self.extra_headers.add(name, value);
        self
    }

    /// Adds a query parameter that the operation does not declare
    pub fn extra_query(mut self, name: &str, value: &str) -> Self {
        self.extra_query.add(name, value);
        self
    }

    /// Merges optional builder-supplied extra headers
    pub fn extra_headers(mut self, headers: Option<Multimap>) -> Self {
        if let Some(h) = headers {
            self.extra_headers.add_multimap(h);
        }
        self
    }

    /// Merges optional builder-supplied extra query parameters
    pub fn extra_query_params(mut self, query: Option<Multimap>) -> Self {
        if let Some(q) = query {
            self.extra_query.add_multimap(q);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// True when any value was bound for `spec`
    pub(crate) fn is_bound(&self, spec: &ParamSpec) -> bool {
        match spec.location {
            ParamLocation::Body => self.body.is_some(),
            ParamLocation::Form => {
                self.values.contains_key(spec.name) || self.files.contains_key(spec.name)
            }
            _ => self.values.contains_key(spec.name),
        }
    }
}
