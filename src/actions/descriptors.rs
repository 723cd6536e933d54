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

//! Operation descriptors of the actions endpoints

use crate::api::auth::LAKEFS_AUTH;
use crate::api::negotiate::{APPLICATION_JSON, APPLICATION_OCTET_STREAM};
use crate::api::types::{OperationDescriptor, ParamSpec};
use http::Method;

/// `GET /repositories/{repository}/actions/runs/{run_id}`
pub static GET_RUN: OperationDescriptor = OperationDescriptor {
    operation_id: "getRun",
    method: Method::GET,
    path: "/repositories/{repository}/actions/runs/{run_id}",
    params: &[ParamSpec::path("repository"), ParamSpec::path("run_id")],
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    auth: LAKEFS_AUTH,
    success: OperationDescriptor::SUCCESS,
};

/// `GET /repositories/{repository}/actions/runs/{run_id}/hooks/{hook_run_id}/output`
///
/// The output is binary; errors are reported as JSON.
pub static GET_RUN_HOOK_OUTPUT: OperationDescriptor = OperationDescriptor {
    operation_id: "getRunHookOutput",
    method: Method::GET,
    path: "/repositories/{repository}/actions/runs/{run_id}/hooks/{hook_run_id}/output",
    params: &[
        ParamSpec::path("repository"),
        ParamSpec::path("run_id"),
        ParamSpec::path("hook_run_id"),
    ],
    accepts: &[APPLICATION_OCTET_STREAM, APPLICATION_JSON],
    content_types: &[],
    auth: LAKEFS_AUTH,
    success: OperationDescriptor::SUCCESS,
};

/// `GET /repositories/{repository}/actions/runs`
pub static LIST_REPOSITORY_RUNS: OperationDescriptor = OperationDescriptor {
    operation_id: "listRepositoryRuns",
    method: Method::GET,
    path: "/repositories/{repository}/actions/runs",
    params: &[
        ParamSpec::path("repository"),
        ParamSpec::query("after"),
        ParamSpec::query("amount").server_default("100"),
        ParamSpec::query("branch"),
        ParamSpec::query("commit"),
    ],
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    auth: LAKEFS_AUTH,
    success: OperationDescriptor::SUCCESS,
};

/// `GET /repositories/{repository}/actions/runs/{run_id}/hooks`
pub static LIST_RUN_HOOKS: OperationDescriptor = OperationDescriptor {
    operation_id: "listRunHooks",
    method: Method::GET,
    path: "/repositories/{repository}/actions/runs/{run_id}/hooks",
    params: &[
        ParamSpec::path("repository"),
        ParamSpec::path("run_id"),
        ParamSpec::query("after"),
        ParamSpec::query("amount").server_default("100"),
    ],
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    auth: LAKEFS_AUTH,
    success: OperationDescriptor::SUCCESS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::params::path_placeholders;
    use crate::api::types::ParamLocation;

    #[test]
    fn test_path_params_match_templates() {
        for d in [&GET_RUN, &GET_RUN_HOOK_OUTPUT, &LIST_REPOSITORY_RUNS, &LIST_RUN_HOOKS] {
            let declared: Vec<&str> = d
                .params
                .iter()
                .filter(|p| p.location == ParamLocation::Path)
                .map(|p| p.name)
                .collect();
            assert_eq!(declared, path_placeholders(d.path), "{}", d.operation_id);
            assert!(d.params.iter().filter(|p| p.location == ParamLocation::Path).all(|p| p.required));
        }
    }
}
