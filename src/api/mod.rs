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

//! HTTP invocation runtime shared by every lakeFS resource
//!
//! # Key Concepts
//!
//! - **Operation descriptors**: one static [`types::OperationDescriptor`] per
//!   endpoint names the path template, method, parameters, media types and
//!   auth schemes.
//! - **Call builder**: [`client::ApiClient::build_call`] validates parameters,
//!   expands the path, negotiates media types and applies credentials,
//!   producing a [`call::PendingCall`]. Nothing is sent until it is executed.
//! - **Execution**: a pending call can be awaited (`send`), run blocking
//!   (`execute`) or run in the background with a callback (`execute_async`).
//!   All three share one exchange and one response decoder.
//!
//! # Example
//!
//! ```no_run
//! use lakefs::api::client::ApiClient;
//! use lakefs::api::types::CallParams;
//! use lakefs::actions::descriptors::GET_RUN;
//! use lakefs::actions::models::ActionRun;
//!
//! # fn example() -> Result<(), lakefs::api::error::Error> {
//! let client = ApiClient::from_env()?;
//! let call = client.build_call(
//!     &GET_RUN,
//!     CallParams::new().set("repository", "repo").set("run_id", "run-1"),
//!     None,
//! )?;
//! let run = call.execute::<ActionRun>()?;
//! println!("{:?}", run.data().status);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod call;
pub mod callback;
pub mod client;
pub mod configuration;
pub mod creds;
pub mod error;
mod executor;
pub mod header_constants;
pub mod multimap_ext;
pub mod negotiate;
pub mod params;
pub mod response;
pub mod types;
pub mod utils;

pub use call::{CallHandle, PendingCall};
pub use callback::{ApiCallback, ProgressListener};
pub use client::{ApiClient, ApiClientBuilder};
pub use error::Error;
pub use response::ApiResponse;
pub use types::{ApiOperation, CallParams, ToPendingCall};
