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

//! Pending calls and their cancellation handles

use crate::api::callback::{ApiCallback, ProgressListener};
use crate::api::client::ApiClient;
use crate::api::error::{Error, TransportError, TransportErrorKind};
use crate::api::executor;
use crate::api::response::{ApiResponse, DecodeResponse};
use crate::api::types::{ApiRequest, OperationDescriptor};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::watch;

/// Cancels a pending or in-flight call. Clones control the same call.
#[derive(Clone, Debug)]
pub struct CallHandle {
    cancel: Arc<watch::Sender<bool>>,
}

impl CallHandle {
    /// Requests cancellation.
    ///
    /// A cancelled call never delivers a successful result. If the exchange
    /// already completed, its callback has already fired and this is a no-op.
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }
}

/// A built request that has not been executed yet.
///
/// Execution consumes the call. Use [`PendingCall::handle`] to keep a way to
/// cancel it.
#[derive(Debug)]
pub struct PendingCall {
    pub(crate) client: ApiClient,
    pub(crate) descriptor: &'static OperationDescriptor,
    pub(crate) request: ApiRequest,
    pub(crate) progress: Option<Arc<dyn ProgressListener>>,
    cancel: Arc<watch::Sender<bool>>,
}

impl PendingCall {
    pub(crate) fn new(
        client: ApiClient,
        descriptor: &'static OperationDescriptor,
        request: ApiRequest,
        progress: Option<Arc<dyn ProgressListener>>,
    ) -> Self {
        let (tx, _) = watch::channel(false);
        PendingCall {
            client,
            descriptor,
            request,
            progress,
            cancel: Arc::new(tx),
        }
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    pub fn descriptor(&self) -> &'static OperationDescriptor {
        self.descriptor
    }

    pub fn handle(&self) -> CallHandle {
        CallHandle {
            cancel: self.cancel.clone(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }

    /// Performs the exchange on the current task
    pub async fn send<T: DecodeResponse>(self) -> Result<ApiResponse<T>, Error> {
        let operation = self.descriptor.operation_id;
        if self.is_cancelled() {
            log::debug!("{operation}: cancelled before start");
            return Err(TransportError::cancelled(operation).into());
        }

        let mut cancel_rx = self.cancel.subscribe();
        let exchange = executor::exchange::<T>(
            &self.client,
            self.descriptor,
            &self.request,
            self.progress.as_ref(),
        );

        let result = tokio::select! {
            biased;
            _ = wait_cancelled(&mut cancel_rx) => {
                log::debug!("{operation}: cancelled in flight");
                Err(TransportError::cancelled(operation).into())
            }
            r = exchange => r,
        };

        match result {
            Ok(_) if self.is_cancelled() => Err(TransportError::cancelled(operation).into()),
            r => r,
        }
    }

    /// Performs the exchange, blocking the calling thread until it completes.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`PendingCall::send`], fails with
    /// `ValidationErr::BlockingInAsyncContext` when called from a
    /// current-thread async runtime, where blocking would deadlock.
    pub fn execute<T: DecodeResponse>(self) -> Result<ApiResponse<T>, Error> {
        executor::block_on_call(self)
    }

    /// Spawns the exchange on the transport runtime and returns immediately.
    ///
    /// The callback is invoked exactly once from a worker thread.
    pub fn execute_async<T, C>(self, callback: C) -> CallHandle
    where
        T: DecodeResponse,
        C: ApiCallback<T>,
    {
        let handle = self.handle();
        let operation = self.descriptor.operation_id;
        let guard = Completion::new(operation, callback);
        match self.client.runtime_handle() {
            Ok(runtime) => {
                log::trace!("{operation}: spawned on transport runtime");
                runtime.spawn(async move {
                    let result = self.send::<T>().await;
                    guard.complete(result);
                });
            }
            Err(e) => guard.complete(Err(e)),
        }
        handle
    }
}

async fn wait_cancelled(rx: &mut watch::Receiver<bool>) {
    let cancelled = rx.wait_for(|c| *c).await.is_ok();
    if !cancelled {
        std::future::pending::<()>().await;
    }
}

/// Delivers the outcome to a callback exactly once.
///
/// If the spawned task is dropped without completing, e.g. because the
/// runtime shut down, the callback receives an aborted transport error.
struct Completion<T, C: ApiCallback<T>> {
    operation: &'static str,
    callback: Option<C>,
    _output: PhantomData<fn() -> T>,
}

impl<T, C: ApiCallback<T>> Completion<T, C> {
    fn new(operation: &'static str, callback: C) -> Self {
        Completion {
            operation,
            callback: Some(callback),
            _output: PhantomData,
        }
    }

    fn complete(mut self, result: Result<ApiResponse<T>, Error>) {
        if let Some(callback) = self.callback.take() {
            callback.on_complete(result);
        }
    }
}

impl<T, C: ApiCallback<T>> Drop for Completion<T, C> {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            log::warn!("{}: dropped before completion", self.operation);
            callback.on_complete(Err(TransportError::new(
                self.operation,
                TransportErrorKind::Aborted,
            )
            .into()));
        }
    }
}
