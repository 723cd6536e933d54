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

//! Traits implemented by operation builders

use crate::api::call::{CallHandle, PendingCall};
use crate::api::callback::ApiCallback;
use crate::api::error::Error;
use crate::api::response::{ApiResponse, DecodeResponse};

/// Convert builder to a [`PendingCall`]
pub trait ToPendingCall {
    /// Builds the request without sending it
    ///
    /// # Errors
    ///
    /// Returns a pre-flight `Error` when a required parameter is missing or
    /// the request cannot be built.
    fn to_pending_call(self) -> Result<PendingCall, Error>;
}

/// Execute an API operation.
///
/// All three entry points build the same request and share one exchange and
/// one decoder, so post-flight errors are identical between them.
pub trait ApiOperation: ToPendingCall + Sized {
    /// Type the success body is decoded into
    type Output: DecodeResponse;

    /// Send the request and await the response
    ///
    /// # Errors
    ///
    /// Returns `Error` if the request cannot be built, the transport fails,
    /// the server answers outside the success range, or the body cannot be
    /// decoded.
    fn send(self) -> impl Future<Output = Result<ApiResponse<Self::Output>, Error>> + Send
    where
        Self: Send,
    {
        async move { self.to_pending_call()?.send::<Self::Output>().await }
    }

    /// Send the request, blocking the current thread until it completes
    fn execute(self) -> Result<ApiResponse<Self::Output>, Error> {
        self.to_pending_call()?.execute::<Self::Output>()
    }

    /// Start the request in the background.
    ///
    /// Pre-flight errors are returned here and the callback is not invoked.
    /// Otherwise the callback receives the outcome exactly once.
    fn execute_async<C>(self, callback: C) -> Result<CallHandle, Error>
    where
        C: ApiCallback<Self::Output>,
    {
        Ok(self.to_pending_call()?.execute_async::<Self::Output, C>(callback))
    }
}
