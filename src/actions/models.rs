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

//! Models returned by the actions endpoints

use crate::api::utils::UtcTime;
use crate::impl_json_response;
use serde::{Deserialize, Serialize};

/// Outcome of an action run or hook run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Failed,
    Skipped,
    #[serde(other)]
    Unknown,
}

/// Paging information of a list response
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub has_more: bool,
    /// Token to pass as `after` for the next page
    #[serde(default)]
    pub next_offset: String,
    pub results: i32,
    pub max_per_page: i32,
}

/// One execution of the actions triggered by an event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRun {
    pub run_id: String,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<UtcTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<UtcTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRunList {
    pub pagination: Pagination,
    pub results: Vec<ActionRun>,
}

/// One hook executed within an action run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HookRun {
    pub hook_run_id: String,
    pub action: String,
    pub hook_id: String,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<UtcTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<UtcTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HookRunList {
    pub pagination: Pagination,
    pub results: Vec<HookRun>,
}

impl_json_response!(ActionRun, ActionRunList, HookRun, HookRunList);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response::DecodeResponse;
    use bytes::Bytes;

    #[test]
    fn test_decode_minimal_action_run() {
        let run = ActionRun::decode(
            Some("application/json"),
            Bytes::from_static(br#"{"run_id":"run123","status":"completed"}"#),
        )
        .unwrap();
        assert_eq!(run.run_id, "run123");
        assert_eq!(run.status, RunStatus::Completed);
        assert!(run.branch.is_none());
    }

    #[test]
    fn test_decode_action_run_list() {
        let body = br#"{
            "pagination": {"has_more": true, "next_offset": "r2", "results": 1, "max_per_page": 1},
            "results": [{
                "run_id": "r1",
                "branch": "main",
                "start_time": "2024-05-01T10:00:00Z",
                "end_time": "2024-05-01T10:00:03Z",
                "event_type": "pre-commit",
                "status": "failed",
                "commit_id": "c0ffee"
            }]
        }"#;
        let list = ActionRunList::decode(None, Bytes::from_static(body)).unwrap();
        assert!(list.pagination.has_more);
        assert_eq!(list.pagination.next_offset, "r2");
        let run = &list.results[0];
        assert_eq!(run.status, RunStatus::Failed);
        assert_eq!(run.event_type.as_deref(), Some("pre-commit"));
        assert!(run.end_time.unwrap() > run.start_time.unwrap());
    }

    #[test]
    fn test_unknown_status() {
        let hook = HookRun::decode(
            None,
            Bytes::from_static(
                br#"{"hook_run_id":"h","action":"a","hook_id":"x","status":"running"}"#,
            ),
        )
        .unwrap();
        assert_eq!(hook.status, RunStatus::Unknown);
    }
}
