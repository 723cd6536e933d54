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

//! Client for the actions endpoints

use crate::actions::builders::{
    GetRun, GetRunBldr, GetRunHookOutput, GetRunHookOutputBldr, ListRepositoryRuns,
    ListRepositoryRunsBldr, ListRunHooks, ListRunHooksBldr,
};
use crate::api::client::ApiClient;
use crate::api::configuration::default_client;
use crate::api::error::Error;

/// Client for lakeFS actions: runs triggered by repository events and the
/// hooks they executed.
///
/// # Example
///
/// ```no_run
/// use lakefs::actions::ActionsClient;
/// use lakefs::api::ApiOperation;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let actions = ActionsClient::with_default_client()?;
/// let hooks = actions.list_run_hooks("my-repo", "run-1").build().send().await?;
/// for hook in &hooks.data().results {
///     println!("{} {:?}", hook.hook_id, hook.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ActionsClient {
    client: ApiClient,
}

impl ActionsClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Uses the process-wide default client
    pub fn with_default_client() -> Result<Self, Error> {
        Ok(Self::new(default_client()?))
    }

    /// The underlying API client
    pub fn api(&self) -> &ApiClient {
        &self.client
    }

    /// Retrieves one action run
    ///
    /// # Arguments
    ///
    /// * `repository` - Repository name
    /// * `run_id` - Run identifier
    pub fn get_run<R: Into<String>, I: Into<String>>(&self, repository: R, run_id: I) -> GetRunBldr {
        GetRun::builder()
            .client(self.clone())
            .repository(repository)
            .run_id(run_id)
    }

    /// Downloads the output of one hook run as bytes
    pub fn get_run_hook_output<R, I, H>(
        &self,
        repository: R,
        run_id: I,
        hook_run_id: H,
    ) -> GetRunHookOutputBldr
    where
        R: Into<String>,
        I: Into<String>,
        H: Into<String>,
    {
        GetRunHookOutput::builder()
            .client(self.clone())
            .repository(repository)
            .run_id(run_id)
            .hook_run_id(hook_run_id)
    }

    /// Lists the action runs of a repository
    pub fn list_repository_runs<R: Into<String>>(&self, repository: R) -> ListRepositoryRunsBldr {
        ListRepositoryRuns::builder()
            .client(self.clone())
            .repository(repository)
    }

    /// Lists the hooks executed by one action run
    pub fn list_run_hooks<R: Into<String>, I: Into<String>>(
        &self,
        repository: R,
        run_id: I,
    ) -> ListRunHooksBldr {
        ListRunHooks::builder()
            .client(self.clone())
            .repository(repository)
            .run_id(run_id)
    }
}
