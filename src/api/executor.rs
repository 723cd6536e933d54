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

//! HTTP exchange and the transport runtime
//!
//! Every entry point funnels into [`exchange`]: the blocking path waits on a
//! channel fed by the non-blocking path, and the non-blocking path spawns the
//! same future the async path awaits.

use crate::api::call::PendingCall;
use crate::api::callback::ProgressListener;
use crate::api::client::ApiClient;
use crate::api::error::{Error, TransportError, TransportErrorKind, ValidationErr};
use crate::api::header_constants::CONTENT_LENGTH;
use crate::api::response::{ApiResponse, DecodeResponse, decode_response};
use crate::api::types::{ApiRequest, OperationDescriptor, RequestBody};
use bytes::{Bytes, BytesMut};
use http::HeaderMap;
use reqwest::Body;
use reqwest::multipart::{Form, Part};
use std::mem;
use std::sync::{Arc, OnceLock, mpsc};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Upload bodies are streamed in chunks of this size when a progress
/// listener is attached
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

static TRANSPORT_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Process-wide runtime used when no runtime is configured or current
pub(crate) fn transport_runtime() -> Result<&'static Runtime, Error> {
    if let Some(rt) = TRANSPORT_RUNTIME.get() {
        return Ok(rt);
    }
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("lakefs-transport")
        .build()
        .map_err(ValidationErr::Runtime)?;
    log::debug!("started lakefs-transport runtime");
    Ok(TRANSPORT_RUNTIME.get_or_init(|| rt))
}

/// Resolves the runtime calls are spawned on: the configured handle, then
/// the current runtime, then the process-wide transport runtime
pub(crate) fn resolve_runtime(configured: Option<&Handle>) -> Result<Handle, Error> {
    if let Some(h) = configured {
        return Ok(h.clone());
    }
    if let Ok(h) = Handle::try_current() {
        return Ok(h);
    }
    transport_runtime().map(|rt| rt.handle().clone())
}

/// Runs a call to completion on the calling thread
pub(crate) fn block_on_call<T: DecodeResponse>(call: PendingCall) -> Result<ApiResponse<T>, Error> {
    let operation = call.descriptor.operation_id;
    let in_runtime = match Handle::try_current() {
        Ok(current) => {
            if current.runtime_flavor() == RuntimeFlavor::CurrentThread {
                return Err(ValidationErr::BlockingInAsyncContext(operation).into());
            }
            true
        }
        Err(_) => false,
    };

    let (tx, rx) = mpsc::channel();
    call.execute_async::<T, _>(move |result: Result<ApiResponse<T>, Error>| {
        let _ = tx.send(result);
    });
    let wait = move || {
        rx.recv()
            .unwrap_or_else(|_| Err(TransportError::new(operation, TransportErrorKind::Aborted).into()))
    };

    if in_runtime {
        tokio::task::block_in_place(wait)
    } else {
        wait()
    }
}

/// Sends the request and decodes the response
pub(crate) async fn exchange<T: DecodeResponse>(
    client: &ApiClient,
    descriptor: &'static OperationDescriptor,
    request: &ApiRequest,
    progress: Option<&Arc<dyn ProgressListener>>,
) -> Result<ApiResponse<T>, Error> {
    let operation = descriptor.operation_id;
    log::debug!("{operation}: {} {}", request.method, request.url);

    let mut req = client
        .http_client()
        .request(request.method.clone(), request.url.as_str());
    for (key, values) in request.headers.iter_all() {
        for value in values {
            req = req.header(key, value);
        }
    }

    match &request.body {
        RequestBody::Empty => {}
        RequestBody::Bytes(data) => {
            req = match progress {
                Some(listener) => {
                    req.header(CONTENT_LENGTH, data.len().to_string())
                        .body(progress_body(data.clone(), Arc::clone(listener)))
                }
                None => req.body(data.clone()),
            };
        }
        RequestBody::Multipart { fields, files } => {
            let mut form = Form::new();
            for (name, value) in fields {
                form = form.text(name.clone(), value.clone());
            }
            for (name, file) in files {
                let mut part = Part::bytes(file.data.to_vec()).file_name(file.file_name.clone());
                if let Some(ct) = &file.content_type {
                    part = part
                        .mime_str(ct)
                        .map_err(|e| TransportError::from_reqwest(operation, e))?;
                }
                form = form.part(name.clone(), part);
            }
            req = req.multipart(form);
        }
    }

    let mut resp = req
        .send()
        .await
        .map_err(|e| TransportError::from_reqwest(operation, e))?;

    let status = resp.status();
    let headers: HeaderMap = mem::take(resp.headers_mut());
    let total = resp.content_length();
    log::trace!("{operation}: HTTP {} headers received", status.as_u16());

    let mut body = BytesMut::new();
    while let Some(chunk) = resp
        .chunk()
        .await
        .map_err(|e| TransportError::from_reqwest(operation, e))?
    {
        body.extend_from_slice(&chunk);
        if let Some(listener) = progress {
            listener.on_download_progress(body.len() as u64, total, false);
        }
    }
    if let Some(listener) = progress {
        listener.on_download_progress(body.len() as u64, total, true);
    }

    decode_response(descriptor, status, headers, body.freeze())
}

/// Streams `data` in chunks, reporting each chunk as it is handed to the
/// transport
fn progress_body(data: Bytes, listener: Arc<dyn ProgressListener>) -> Body {
    let total = data.len() as u64;
    if total == 0 {
        listener.on_upload_progress(0, Some(0), true);
        return Body::from(data);
    }
    let chunks: Vec<Bytes> = (0..data.len())
        .step_by(UPLOAD_CHUNK_SIZE)
        .map(|start| data.slice(start..(start + UPLOAD_CHUNK_SIZE).min(data.len())))
        .collect();
    let mut written = 0u64;
    let stream = futures_util::stream::iter(chunks.into_iter().map(move |chunk| {
        written += chunk.len() as u64;
        listener.on_upload_progress(written, Some(total), written == total);
        Ok::<Bytes, std::io::Error>(chunk)
    }));
    Body::wrap_stream(stream)
}
