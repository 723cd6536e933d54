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

use lakefs::actions::models::RunStatus;
use lakefs::api::ApiOperation;
use lakefs_common::test_context::TestContext;
use lakefs_common::utils::{action_run_json, hook_run_json, pagination_json, rand_repository_name};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn list_repository_runs_with_filters() {
    let ctx = TestContext::new().await;
    let repo = rand_repository_name();

    Mock::given(method("GET"))
        .and(path(TestContext::api_path(&format!(
            "/repositories/{repo}/actions/runs"
        ))))
        .and(query_param("branch", "main"))
        .and(query_param("after", "run 0"))
        .and(query_param("amount", "2"))
        .and(query_param_is_missing("commit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": pagination_json(true, "r2", 2),
            "results": [action_run_json("r1", "completed"), action_run_json("r2", "failed")],
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .actions
        .list_repository_runs(&repo)
        .branch("main")
        .after("run 0")
        .amount(2)
        .build()
        .send()
        .await
        .unwrap();

    let list = resp.data();
    assert!(list.pagination.has_more);
    assert_eq!(list.pagination.next_offset, "r2");
    let ids: Vec<&str> = list.results.iter().map(|r| r.run_id.as_str()).collect();
    assert_eq!(ids, ["r1", "r2"]);
    assert_eq!(list.results[1].status, RunStatus::Failed);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_repository_runs_omits_unset_parameters() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(TestContext::api_path("/repositories/repo/actions/runs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": pagination_json(false, "", 0),
            "results": [],
        })))
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .actions
        .list_repository_runs("repo")
        .build()
        .send()
        .await
        .unwrap();
    assert!(resp.data().results.is_empty());

    let requests = ctx.server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_run_hooks() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(TestContext::api_path("/repositories/repo/actions/runs/r1/hooks")))
        .and(query_param("amount", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": pagination_json(false, "", 2),
            "results": [hook_run_json("h1", "completed"), hook_run_json("h2", "skipped")],
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .actions
        .list_run_hooks("repo", "r1")
        .amount(10)
        .build()
        .send()
        .await
        .unwrap();
    let hooks = &resp.data().results;
    assert_eq!(hooks.len(), 2);
    assert_eq!(hooks[0].hook_id, "lint");
    assert_eq!(hooks[1].status, RunStatus::Skipped);
}
