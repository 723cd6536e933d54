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

use clap::{Parser, Subcommand};
use lakefs::actions::ActionsClient;
use lakefs::api::{ApiClient, ApiOperation};
use log::info;
use std::io::Write;

/// Inspect lakeFS action runs.
///
/// The server and credentials are read from LAKEFS_ENDPOINT,
/// LAKEFS_ACCESS_KEY_ID, LAKEFS_SECRET_ACCESS_KEY or LAKEFS_ACCESS_TOKEN.
#[derive(Parser)]
#[command(name = "lakefs-actions", version)]
struct Cli {
    /// Repository holding the runs
    repository: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the action runs of the repository
    Runs {
        #[arg(long)]
        branch: Option<String>,
        #[arg(long)]
        commit: Option<String>,
        /// Continue after this run id
        #[arg(long)]
        after: Option<String>,
        #[arg(long)]
        amount: Option<i32>,
    },
    /// Show one action run
    Run { run_id: String },
    /// List the hooks executed by a run
    Hooks { run_id: String },
    /// Write the output of a hook run to stdout
    Output { run_id: String, hook_run_id: String },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="DEBUG" to trace calls
    let args = Cli::parse();

    let client = ApiClient::from_env()?;
    info!("Using lakeFS at {}", client.base_url());
    let actions = ActionsClient::new(client);

    match args.command {
        Command::Runs {
            branch,
            commit,
            after,
            amount,
        } => {
            let resp = actions
                .list_repository_runs(&args.repository)
                .branch_opt(branch)
                .commit_opt(commit)
                .after_opt(after)
                .amount_opt(amount)
                .build()
                .execute()?;
            for run in &resp.data().results {
                println!(
                    "{}\t{:?}\t{}\t{}",
                    run.run_id,
                    run.status,
                    run.event_type.as_deref().unwrap_or("-"),
                    run.branch.as_deref().unwrap_or("-"),
                );
            }
            let pagination = &resp.data().pagination;
            if pagination.has_more {
                info!("more runs after {}", pagination.next_offset);
            }
        }
        Command::Run { run_id } => {
            let resp = actions.get_run(&args.repository, run_id).build().execute()?;
            println!("{}", serde_json::to_string_pretty(resp.data())?);
        }
        Command::Hooks { run_id } => {
            let resp = actions
                .list_run_hooks(&args.repository, run_id)
                .build()
                .execute()?;
            for hook in &resp.data().results {
                println!(
                    "{}\t{}\t{}\t{:?}",
                    hook.hook_run_id, hook.action, hook.hook_id, hook.status
                );
            }
        }
        Command::Output {
            run_id,
            hook_run_id,
        } => {
            let resp = actions
                .get_run_hook_output(&args.repository, run_id, hook_run_id)
                .build()
                .execute()?;
            std::io::stdout().write_all(resp.data())?;
        }
    }
    Ok(())
}
