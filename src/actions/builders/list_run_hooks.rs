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

//! Builder for listRunHooks operation

use crate::actions::client::ActionsClient;
use crate::actions::descriptors::LIST_RUN_HOOKS;
use crate::actions::models::HookRunList;
use crate::api::call::PendingCall;
use crate::api::callback::ProgressListener;
use crate::api::error::Error;
use crate::api::multimap_ext::Multimap;
use crate::api::types::{ApiOperation, CallParams, ToPendingCall};
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// Argument builder for listRunHooks operation
///
/// Lists the hooks executed by one action run.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListRunHooks {
    #[builder(!default)]
    client: ActionsClient,
    #[builder(!default, setter(into))]
    repository: String,
    #[builder(!default, setter(into))]
    run_id: String,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(strip_option))]
    progress: Option<Arc<dyn ProgressListener>>,
    #[builder(default, setter(into, strip_option(fallback = after_opt)))]
    after: Option<String>,
    #[builder(default, setter(strip_option(fallback = amount_opt)))]
    amount: Option<i32>,
}

impl ApiOperation for ListRunHooks {
    type Output = HookRunList;
}

/// Builder type for ListRunHooks
pub type ListRunHooksBldr =
    ListRunHooksBuilder<((ActionsClient,), (String,), (String,), (), (), (), (), ())>;

impl ToPendingCall for ListRunHooks {
    fn to_pending_call(self) -> Result<PendingCall, Error> {
        let params = CallParams::new()
            .set("repository", self.repository)
            .set("run_id", self.run_id)
            .set_opt("after", self.after)
            .set_opt("amount", self.amount)
            .extra_headers(self.extra_headers)
            .extra_query_params(self.extra_query_params);
        self.client
            .api()
            .build_call(&LIST_RUN_HOOKS, params, self.progress)
    }
}
