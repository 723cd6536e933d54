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

//! Error definitions for lakeFS API calls
//!
//! Errors fall into two phases:
//!
//! - **pre-flight**: [`Error::MissingParameter`], [`Error::Serialization`] and
//!   [`Error::Validation`] are raised while the call is being built, before any
//!   network activity.
//! - **post-flight**: [`Error::Transport`], [`Error::Api`] and
//!   [`Error::Deserialization`] are produced by the exchange itself and are
//!   delivered identically by every execution entry point.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Decoded error body returned by the lakeFS server.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    /// Human readable message
    #[serde(default)]
    pub message: String,
    /// Optional machine readable error code
    #[serde(default)]
    pub code: Option<String>,
}

/// Failure reported by the server: the status code fell outside the
/// operation's success range.
#[derive(Clone, Debug)]
pub struct ApiError {
    pub(crate) operation: &'static str,
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) payload: Option<ErrorPayload>,
}

impl ApiError {
    /// Builds the error from a raw response, decoding the body into an
    /// [`ErrorPayload`] when it is well-formed JSON.
    pub fn from_response(
        operation: &'static str,
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
    ) -> Self {
        let payload = serde_json::from_slice::<ErrorPayload>(&body)
            .ok()
            .filter(|p| !p.message.is_empty() || p.code.is_some());
        Self {
            operation,
            status,
            headers,
            body,
            payload,
        }
    }

    /// Operation that produced this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// HTTP status code returned by the server
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// HTTP headers returned by the server
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body, preserved even when it is not valid JSON
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Decoded error payload, if the body could be decoded
    pub fn payload(&self) -> Option<&ErrorPayload> {
        self.payload.as_ref()
    }

    /// Message from the decoded payload, or the body as lossy UTF-8
    pub fn message(&self) -> String {
        match &self.payload {
            Some(p) if !p.message.is_empty() => p.message.clone(),
            _ => String::from_utf8_lossy(&self.body).into_owned(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed with HTTP status {}: {}",
            self.operation,
            self.status.as_u16(),
            self.message()
        )
    }
}

/// A success status whose body could not be decoded into the declared type.
#[derive(Debug)]
pub struct DeserializationError {
    pub(crate) operation: &'static str,
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) reason: DecodeError,
}

impl DeserializationError {
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn reason(&self) -> &DecodeError {
        &self.reason
    }
}

impl fmt::Display for DeserializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} returned HTTP status {} with an undecodable body: {}",
            self.operation,
            self.status.as_u16(),
            self.reason
        )
    }
}

/// Why a response body could not be decoded
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content type '{0}' is not supported for this response type")]
    UnsupportedContentType(String),
    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Request body could not be encoded
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("failed to encode request body as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content type '{content_type}' cannot carry a {payload} body")]
    UnsupportedContentType {
        content_type: String,
        payload: &'static str,
    },
}

/// Kind of transport failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection could not be established (DNS, refused, TLS handshake)
    Connect,
    /// Connect or request timeout expired
    Timeout,
    /// Request or response body could not be transferred
    Body,
    /// The call was cancelled through its handle
    Cancelled,
    /// The transport runtime dropped the call before it completed
    Aborted,
    /// Any other request failure
    Request,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportErrorKind::Connect => "connection failed",
            TransportErrorKind::Timeout => "timed out",
            TransportErrorKind::Body => "body transfer failed",
            TransportErrorKind::Cancelled => "call cancelled",
            TransportErrorKind::Aborted => "call aborted by the transport",
            TransportErrorKind::Request => "request failed",
        };
        f.write_str(s)
    }
}

/// Failure before a status code was obtained. No status is available.
#[derive(Debug, Error)]
#[error("{operation}: {kind}{}", source.as_ref().map(|e| format!(": {e}")).unwrap_or_default())]
pub struct TransportError {
    pub(crate) operation: &'static str,
    pub(crate) kind: TransportErrorKind,
    #[source]
    pub(crate) source: Option<reqwest::Error>,
}

impl TransportError {
    pub(crate) fn new(operation: &'static str, kind: TransportErrorKind) -> Self {
        Self {
            operation,
            kind,
            source: None,
        }
    }

    pub(crate) fn cancelled(operation: &'static str) -> Self {
        Self::new(operation, TransportErrorKind::Cancelled)
    }

    /// Classifies a reqwest error into a transport failure.
    pub(crate) fn from_reqwest(operation: &'static str, err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Request
        };
        Self {
            operation,
            kind,
            source: Some(err),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }
}

/// Invalid configuration or request shape, detected before sending
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid request URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid path template '{template}': {reason}")]
    InvalidPathTemplate {
        template: &'static str,
        reason: &'static str,
    },
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },
    #[error("parameter '{parameter}' is not declared by {operation}")]
    UnknownParameter {
        operation: &'static str,
        parameter: String,
    },
    #[error("parameter '{parameter}' of {operation} does not accept a file value")]
    UnexpectedFile {
        operation: &'static str,
        parameter: String,
    },
    #[error("blocking execution of {0} is not possible on a current-thread async runtime")]
    BlockingInAsyncContext(&'static str),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("failed to start transport runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to read certificate file: {0}")]
    CertFile(#[source] std::io::Error),
}

/// Error returned by every lakeFS API call
#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter was not provided; nothing was sent.
    #[error("missing the required parameter '{parameter}' when calling {operation}")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error("failed to serialize request body for {operation}: {source}")]
    Serialization {
        operation: &'static str,
        #[source]
        source: SerializationError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("{0}")]
    Api(Box<ApiError>),

    #[error("{0}")]
    Deserialization(Box<DeserializationError>),
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(Box::new(err))
    }
}

impl From<DeserializationError> for Error {
    fn from(err: DeserializationError) -> Self {
        Error::Deserialization(Box::new(err))
    }
}

impl Error {
    /// Status code of the response, absent for pre-flight and transport errors
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(e) => Some(e.status),
            Error::Deserialization(e) => Some(e.status),
            _ => None,
        }
    }

    /// Response headers, absent for pre-flight and transport errors
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            Error::Api(e) => Some(&e.headers),
            Error::Deserialization(e) => Some(&e.headers),
            _ => None,
        }
    }

    /// Raw response body, absent for pre-flight and transport errors
    pub fn raw_body(&self) -> Option<&Bytes> {
        match self {
            Error::Api(e) => Some(&e.body),
            Error::Deserialization(e) => Some(&e.body),
            _ => None,
        }
    }

    /// True when the failure happened before a status code was obtained
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Transport(e) if e.kind == TransportErrorKind::Cancelled)
    }

    /// True when the error was raised while building the call
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter { .. } | Error::Serialization { .. } | Error::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_decodes_payload() {
        let err = ApiError::from_response(
            "getRun",
            StatusCode::NOT_FOUND,
            HeaderMap::new(),
            Bytes::from_static(br#"{"message":"run not found"}"#),
        );
        assert_eq!(err.payload().unwrap().message, "run not found");
        assert_eq!(err.message(), "run not found");
        assert_eq!(
            err.to_string(),
            "getRun failed with HTTP status 404: run not found"
        );
    }

    #[test]
    fn test_api_error_keeps_raw_body_when_not_json() {
        let err = ApiError::from_response(
            "getRun",
            StatusCode::UNAUTHORIZED,
            HeaderMap::new(),
            Bytes::from_static(b"<html>denied</html>"),
        );
        assert!(err.payload().is_none());
        assert_eq!(err.body().as_ref(), b"<html>denied</html>");
        assert_eq!(err.message(), "<html>denied</html>");
    }

    #[test]
    fn test_api_error_empty_object_has_no_payload() {
        let err = ApiError::from_response(
            "getRun",
            StatusCode::NOT_FOUND,
            HeaderMap::new(),
            Bytes::from_static(b"{}"),
        );
        assert!(err.payload().is_none());
    }

    #[test]
    fn test_error_phase_accessors() {
        let missing = Error::MissingParameter {
            operation: "getRun",
            parameter: "run_id",
        };
        assert!(missing.is_pre_flight());
        assert!(missing.status().is_none());
        assert_eq!(
            missing.to_string(),
            "missing the required parameter 'run_id' when calling getRun"
        );

        let cancelled: Error = TransportError::cancelled("getRun").into();
        assert!(cancelled.is_transport_failure());
        assert!(cancelled.is_cancelled());
        assert!(!cancelled.is_pre_flight());
        assert!(cancelled.status().is_none());
        assert_eq!(cancelled.to_string(), "getRun: call cancelled");

        let api: Error = ApiError::from_response(
            "getRun",
            StatusCode::UNAUTHORIZED,
            HeaderMap::new(),
            Bytes::new(),
        )
        .into();
        assert_eq!(api.status(), Some(StatusCode::UNAUTHORIZED));
        assert!(!api.is_transport_failure());
    }
}
