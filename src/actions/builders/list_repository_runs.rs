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

//! Builder for listRepositoryRuns operation

use crate::actions::client::ActionsClient;
use crate::actions::descriptors::LIST_REPOSITORY_RUNS;
use crate::actions::models::ActionRunList;
use crate::api::call::PendingCall;
use crate::api::callback::ProgressListener;
use crate::api::error::Error;
use crate::api::multimap_ext::Multimap;
use crate::api::types::{ApiOperation, CallParams, ToPendingCall};
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// Argument builder for listRepositoryRuns operation
///
/// Lists the action runs of a repository, optionally filtered by branch or
/// commit. Results are paged; pass `Pagination::next_offset` as `after`
/// to continue.
///
/// # Example
///
/// ```no_run
/// use lakefs::actions::ActionsClient;
/// use lakefs::api::{ApiClient, ApiOperation};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let actions = ActionsClient::new(ApiClient::from_env()?);
/// let runs = actions
///     .list_repository_runs("my-repo")
///     .branch("main")
///     .amount(10)
///     .build()
///     .execute()?;
/// for run in &runs.data().results {
///     println!("{} {:?}", run.run_id, run.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListRepositoryRuns {
    #[builder(!default)]
    client: ActionsClient,
    #[builder(!default, setter(into))]
    repository: String,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(strip_option))]
    progress: Option<Arc<dyn ProgressListener>>,
    /// Return items after this value
    #[builder(default, setter(into, strip_option(fallback = after_opt)))]
    after: Option<String>,
    /// How many items to return; the server defaults to 100
    #[builder(default, setter(strip_option(fallback = amount_opt)))]
    amount: Option<i32>,
    #[builder(default, setter(into, strip_option(fallback = branch_opt)))]
    branch: Option<String>,
    #[builder(default, setter(into, strip_option(fallback = commit_opt)))]
    commit: Option<String>,
}

impl ApiOperation for ListRepositoryRuns {
    type Output = ActionRunList;
}

/// Builder type for ListRepositoryRuns
pub type ListRepositoryRunsBldr =
    ListRepositoryRunsBuilder<((ActionsClient,), (String,), (), (), (), (), (), (), ())>;

impl ToPendingCall for ListRepositoryRuns {
    fn to_pending_call(self) -> Result<PendingCall, Error> {
        let params = CallParams::new()
            .set("repository", self.repository)
            .set_opt("after", self.after)
            .set_opt("amount", self.amount)
            .set_opt("branch", self.branch)
            .set_opt("commit", self.commit)
            .extra_headers(self.extra_headers)
            .extra_query_params(self.extra_query_params);
        self.client
            .api()
            .build_call(&LIST_REPOSITORY_RUNS, params, self.progress)
    }
}
