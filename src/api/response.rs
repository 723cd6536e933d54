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

//! Response decoding and error mapping

use crate::api::error::{ApiError, DecodeError, DeserializationError, Error};
use crate::api::negotiate::is_json_mime;
use crate::api::types::OperationDescriptor;
pub use bytes::Bytes;
use http::{HeaderMap, StatusCode, header};
use serde::de::DeserializeOwned;

/// Decoded response: status, headers and payload
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    headers: HeaderMap,
    data: T,
}

impl<T> ApiResponse<T> {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the response, returning only the payload
    pub fn into_data(self) -> T {
        self.data
    }

    /// Consumes the response, returning all parts
    pub fn into_parts(self) -> (StatusCode, HeaderMap, T) {
        (self.status, self.headers, self.data)
    }
}

/// Types a success response body can be decoded into
pub trait DecodeResponse: Sized + Send + 'static {
    /// Decodes `body`; `content_type` is the response `Content-Type`, if any
    fn decode(content_type: Option<&str>, body: Bytes) -> Result<Self, DecodeError>;
}

fn require_json(content_type: Option<&str>) -> Result<(), DecodeError> {
    match content_type {
        None => Ok(()),
        Some(ct) if ct.trim().is_empty() || is_json_mime(ct) => Ok(()),
        Some(ct) => Err(DecodeError::UnsupportedContentType(ct.to_string())),
    }
}

/// Decodes a JSON body into any deserializable type
pub fn decode_json<T: DeserializeOwned>(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<T, DecodeError> {
    require_json(content_type)?;
    Ok(serde_json::from_slice(body)?)
}

/// Wrapper decoding a JSON body into any deserializable type
#[derive(Clone, Debug, PartialEq)]
pub struct Json<T>(pub T);

impl<T: DeserializeOwned + Send + 'static> DecodeResponse for Json<T> {
    fn decode(content_type: Option<&str>, body: Bytes) -> Result<Self, DecodeError> {
        decode_json(content_type, &body).map(Json)
    }
}

/// Implements [`DecodeResponse`] for JSON model types
#[macro_export]
macro_rules! impl_json_response {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::api::response::DecodeResponse for $t {
                fn decode(
                    content_type: Option<&str>,
                    body: $crate::api::response::Bytes,
                ) -> Result<Self, $crate::api::error::DecodeError> {
                    $crate::api::response::decode_json(content_type, &body)
                }
            }
        )*
    };
}

impl_json_response!(serde_json::Value);

/// Binary payloads are passed through without parsing
impl DecodeResponse for Bytes {
    fn decode(_content_type: Option<&str>, body: Bytes) -> Result<Self, DecodeError> {
        Ok(body)
    }
}

impl DecodeResponse for Vec<u8> {
    fn decode(_content_type: Option<&str>, body: Bytes) -> Result<Self, DecodeError> {
        Ok(body.to_vec())
    }
}

impl DecodeResponse for String {
    fn decode(_content_type: Option<&str>, body: Bytes) -> Result<Self, DecodeError> {
        Ok(String::from_utf8(body.to_vec())?)
    }
}

/// The body is ignored
impl DecodeResponse for () {
    fn decode(_content_type: Option<&str>, _body: Bytes) -> Result<Self, DecodeError> {
        Ok(())
    }
}

/// Maps a completed exchange to a typed response or an error.
///
/// The status is checked first: outside the operation's success range the
/// result is [`Error::Api`]; otherwise the body is decoded as `T`.
pub fn decode_response<T: DecodeResponse>(
    descriptor: &OperationDescriptor,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse<T>, Error> {
    if !descriptor.is_success(status) {
        log::debug!(
            "{} returned HTTP status {}",
            descriptor.operation_id,
            status.as_u16()
        );
        return Err(ApiError::from_response(descriptor.operation_id, status, headers, body).into());
    }
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    match T::decode(content_type.as_deref(), body.clone()) {
        Ok(data) => Ok(ApiResponse {
            status,
            headers,
            data,
        }),
        Err(reason) => {
            log::warn!(
                "{} returned an undecodable body: {}",
                descriptor.operation_id,
                reason
            );
            Err(DeserializationError {
                operation: descriptor.operation_id,
                status,
                headers,
                body,
                reason,
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::LAKEFS_AUTH;
    use http::{HeaderValue, Method};
    use serde::Deserialize;

    static DESC: OperationDescriptor = OperationDescriptor {
        operation_id: "getThing",
        method: Method::GET,
        path: "/things/{id}",
        params: &[],
        accepts: &["application/json"],
        content_types: &[],
        auth: LAKEFS_AUTH,
        success: OperationDescriptor::SUCCESS,
    };

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: String,
    }

    impl_json_response!(Thing);

    fn json_headers() -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        h
    }

    #[test]
    fn test_decode_success_json() {
        let resp: ApiResponse<Thing> = decode_response(
            &DESC,
            StatusCode::OK,
            json_headers(),
            Bytes::from_static(br#"{"id":"x"}"#),
        )
        .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.data().id, "x");
    }

    #[test]
    fn test_decode_error_status_takes_precedence() {
        let err = decode_response::<Thing>(
            &DESC,
            StatusCode::NOT_FOUND,
            json_headers(),
            Bytes::from_static(b"{}"),
        )
        .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(matches!(err, Error::Api(_)));
    }

    #[test]
    fn test_decode_bad_json_is_deserialization_error() {
        let err = decode_response::<Thing>(
            &DESC,
            StatusCode::OK,
            json_headers(),
            Bytes::from_static(b"not json"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
        assert_eq!(err.raw_body().unwrap().as_ref(), b"not json");
        assert_eq!(err.status(), Some(StatusCode::OK));
    }

    #[test]
    fn test_decode_rejects_non_json_content_type() {
        let mut h = HeaderMap::new();
        h.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
        let err = decode_response::<Thing>(
            &DESC,
            StatusCode::OK,
            h,
            Bytes::from_static(br#"{"id":"x"}"#),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }

    #[test]
    fn test_decode_binary_passthrough() {
        let mut h = HeaderMap::new();
        h.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/octet-stream"),
        );
        let resp: ApiResponse<Bytes> =
            decode_response(&DESC, StatusCode::OK, h, Bytes::from_static(b"\x00\xffraw")).unwrap();
        assert_eq!(resp.into_data().as_ref(), b"\x00\xffraw");
    }

    #[test]
    fn test_decode_unit_and_string() {
        let resp: ApiResponse<()> =
            decode_response(&DESC, StatusCode::NO_CONTENT, HeaderMap::new(), Bytes::new()).unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let resp: ApiResponse<String> = decode_response(
            &DESC,
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(b"hello"),
        )
        .unwrap();
        assert_eq!(resp.data(), "hello");
        let resp: ApiResponse<Json<Vec<u32>>> = decode_response(
            &DESC,
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(b"[1,2]"),
        )
        .unwrap();
        assert_eq!(resp.into_data().0, vec![1, 2]);
    }
}
