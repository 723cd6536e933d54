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

//! Completion and progress callbacks for non-blocking execution

use crate::api::error::Error;
use crate::api::response::ApiResponse;

/// Receives the outcome of a non-blocking call.
///
/// `on_complete` is invoked exactly once, on a transport worker thread.
/// Closures `Fn(Result<ApiResponse<T>, Error>)` implement this trait.
pub trait ApiCallback<T>: Send + 'static {
    fn on_complete(&self, result: Result<ApiResponse<T>, Error>);
}

impl<T, F> ApiCallback<T> for F
where
    F: Fn(Result<ApiResponse<T>, Error>) + Send + 'static,
{
    fn on_complete(&self, result: Result<ApiResponse<T>, Error>) {
        self(result)
    }
}

/// Receives transfer progress. Both methods default to doing nothing.
///
/// `total` is `None` when the size is unknown. The last notification of each
/// direction has `done` set.
pub trait ProgressListener: std::fmt::Debug + Send + Sync {
    fn on_upload_progress(&self, _written: u64, _total: Option<u64>, _done: bool) {}

    fn on_download_progress(&self, _read: u64, _total: Option<u64>, _done: bool) {}
}
