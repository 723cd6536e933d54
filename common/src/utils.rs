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

use chrono::{Duration, Utc};
use rand::distr::{Alphanumeric, SampleString};
use serde_json::{Value, json};

pub fn rand_repository_name() -> String {
    format!(
        "repo-{}",
        Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
    )
}

pub fn rand_run_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub fn pagination_json(has_more: bool, next_offset: &str, results: usize) -> Value {
    json!({
        "has_more": has_more,
        "next_offset": next_offset,
        "results": results,
        "max_per_page": 100,
    })
}

pub fn action_run_json(run_id: &str, status: &str) -> Value {
    let start = Utc::now() - Duration::seconds(5);
    json!({
        "run_id": run_id,
        "branch": "main",
        "start_time": start.to_rfc3339(),
        "end_time": Utc::now().to_rfc3339(),
        "event_type": "pre-commit",
        "status": status,
        "commit_id": "c0ffee",
    })
}

pub fn hook_run_json(hook_run_id: &str, status: &str) -> Value {
    json!({
        "hook_run_id": hook_run_id,
        "action": "check_commit",
        "hook_id": "lint",
        "status": status,
        "start_time": Utc::now().to_rfc3339(),
    })
}

pub fn error_json(message: &str) -> Value {
    json!({ "message": message })
}
