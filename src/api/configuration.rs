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

//! Process-wide default client
//!
//! Facades created without an explicit client use the default client. It is
//! built from the environment on first use unless one was installed with
//! [`set_default_client`].

use crate::api::client::ApiClient;
use crate::api::error::Error;
use std::sync::RwLock;

static DEFAULT_CLIENT: RwLock<Option<ApiClient>> = RwLock::new(None);

/// Returns the default client, building it with [`ApiClient::from_env`] on
/// first use
pub fn default_client() -> Result<ApiClient, Error> {
    if let Some(client) = DEFAULT_CLIENT
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .as_ref()
    {
        return Ok(client.clone());
    }
    let mut guard = DEFAULT_CLIENT.write().unwrap_or_else(|e| e.into_inner());
    if let Some(client) = guard.as_ref() {
        return Ok(client.clone());
    }
    let client = ApiClient::from_env()?;
    log::debug!("default client created for {}", client.base_url());
    *guard = Some(client.clone());
    Ok(client)
}

/// Installs the client returned by [`default_client`]
pub fn set_default_client(client: ApiClient) {
    *DEFAULT_CLIENT.write().unwrap_or_else(|e| e.into_inner()) = Some(client);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::creds::StaticProvider;

    #[test]
    fn test_set_default_client() {
        let client = ApiClient::new::<StaticProvider>("http://lakefs.example:8000/api/v1", None).unwrap();
        set_default_client(client);
        assert_eq!(
            default_client().unwrap().base_url(),
            "http://lakefs.example:8000/api/v1"
        );
    }
}
