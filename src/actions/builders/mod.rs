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

//! Argument builders for actions operations

mod get_run;
mod get_run_hook_output;
mod list_repository_runs;
mod list_run_hooks;

pub use get_run::{GetRun, GetRunBldr};
pub use get_run_hook_output::{GetRunHookOutput, GetRunHookOutputBldr};
pub use list_repository_runs::{ListRepositoryRuns, ListRepositoryRunsBldr};
pub use list_run_hooks::{ListRunHooks, ListRunHooksBldr};
