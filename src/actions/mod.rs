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

//! lakeFS actions: runs of hooks triggered by repository events
//!
//! Every operation is a static descriptor in [`descriptors`] plus a typed
//! builder in [`builders`]; the builders are obtained from an
//! [`ActionsClient`].
//!
//! # Example
//!
//! ```no_run
//! use lakefs::actions::ActionsClient;
//! use lakefs::api::{ApiClient, ApiOperation};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let actions = ActionsClient::new(ApiClient::from_env()?);
//! let run = actions.get_run("my-repo", "run-1").build().execute()?;
//! println!("{:?} on {:?}", run.data().status, run.data().branch);
//! # Ok(())
//! # }
//! ```

pub mod builders;
pub mod client;
pub mod descriptors;
pub mod models;

pub use client::ActionsClient;
