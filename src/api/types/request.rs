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

//! Fully built HTTP request

use crate::api::multimap_ext::Multimap;
use crate::api::types::FormFile;
use bytes::Bytes;
use http::Method;

/// Serialized request body
#[derive(Clone, Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Serialized bytes, including url-encoded forms. The media type is
    /// already in the `Content-Type` header.
    Bytes(Bytes),
    /// `multipart/form-data` text fields and file parts
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<(String, FormFile)>,
    },
}

impl RequestBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, RequestBody::Empty)
    }
}

/// Immutable request produced by the call builder.
///
/// Multi-valued headers keep every value in insertion order.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: Multimap,
    pub(crate) body: RequestBody,
}

impl ApiRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Full URL: base URL, substituted path and encoded query
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    /// First value of a header, matched case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All values of a header, matched case-insensitively
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter_all()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .flat_map(|(_, v)| v.iter().map(String::as_str))
            .collect()
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }
}
