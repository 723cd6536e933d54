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

//! Authentication schemes and their request contributions

use crate::api::creds::Credentials;
use crate::api::header_constants::AUTHORIZATION;
use crate::api::utils::b64encode;

/// Where an API key is placed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiKeyLocation {
    Header,
    Query,
    Cookie,
}

/// Authentication scheme an operation accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Basic base64(username:password)`
    HttpBasic { name: &'static str },
    /// `Authorization: Bearer <token>`
    HttpBearer { name: &'static str },
    /// API key in a header, query parameter or cookie
    ApiKey {
        name: &'static str,
        location: ApiKeyLocation,
        param_name: &'static str,
    },
}

/// lakeFS HTTP basic authentication with access key id and secret
pub const BASIC_AUTH: AuthScheme = AuthScheme::HttpBasic { name: "basic_auth" };
/// lakeFS session cookie
pub const COOKIE_AUTH: AuthScheme = AuthScheme::ApiKey {
    name: "cookie_auth",
    location: ApiKeyLocation::Cookie,
    param_name: "internal_key",
};
/// lakeFS JWT bearer token
pub const JWT_TOKEN: AuthScheme = AuthScheme::HttpBearer { name: "jwt_token" };
/// lakeFS OIDC session cookie
pub const OIDC_AUTH: AuthScheme = AuthScheme::ApiKey {
    name: "oidc_auth",
    location: ApiKeyLocation::Cookie,
    param_name: "oidc_auth_session",
};

/// Schemes accepted by every lakeFS operation
pub const LAKEFS_AUTH: &[AuthScheme] = &[BASIC_AUTH, COOKIE_AUTH, JWT_TOKEN, OIDC_AUTH];

/// What applying auth adds to a request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthContribution {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub cookies: Vec<(String, String)>,
}

impl AuthContribution {
    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.query.is_empty() && self.cookies.is_empty()
    }

    fn has_authorization(&self) -> bool {
        self.headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(AUTHORIZATION))
    }
}

impl AuthScheme {
    pub fn name(&self) -> &'static str {
        match self {
            AuthScheme::HttpBasic { name }
            | AuthScheme::HttpBearer { name }
            | AuthScheme::ApiKey { name, .. } => name,
        }
    }

    /// Adds this scheme's contribution to `out`.
    ///
    /// Returns false, leaving `out` untouched, when the credential the scheme
    /// needs is not set.
    pub fn contribute(&self, creds: &Credentials, out: &mut AuthContribution) -> bool {
        match self {
            AuthScheme::HttpBasic { .. } => {
                let (Some(user), Some(pass)) = (&creds.username, &creds.password) else {
                    return false;
                };
                out.headers.push((
                    AUTHORIZATION.to_string(),
                    format!("Basic {}", b64encode(format!("{user}:{pass}"))),
                ));
            }
            AuthScheme::HttpBearer { .. } => {
                let Some(token) = &creds.access_token else {
                    return false;
                };
                out.headers
                    .push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
            }
            AuthScheme::ApiKey {
                name,
                location,
                param_name,
            } => {
                let Some(key) = creds.api_key(name) else {
                    return false;
                };
                let pair = (param_name.to_string(), key);
                match location {
                    ApiKeyLocation::Header => out.headers.push(pair),
                    ApiKeyLocation::Query => out.query.push(pair),
                    ApiKeyLocation::Cookie => out.cookies.push(pair),
                }
            }
        }
        true
    }
}

/// Collects the contributions of every scheme whose credential is set.
///
/// Schemes without credentials are skipped; the server decides whether the
/// request is authorized. `Authorization` is single-valued, so only the first
/// scheme producing it is applied.
pub fn apply(schemes: &[AuthScheme], creds: &Credentials) -> AuthContribution {
    let mut out = AuthContribution::default();
    for scheme in schemes {
        let sets_authorization = matches!(
            scheme,
            AuthScheme::HttpBasic { .. } | AuthScheme::HttpBearer { .. }
        ) || matches!(
            scheme,
            AuthScheme::ApiKey {
                location: ApiKeyLocation::Header,
                param_name,
                ..
            } if param_name.eq_ignore_ascii_case(AUTHORIZATION)
        );
        if sets_authorization && out.has_authorization() {
            log::trace!("auth scheme {} skipped: Authorization already set", scheme.name());
            continue;
        }
        if scheme.contribute(creds, &mut out) {
            log::trace!("auth scheme {} applied", scheme.name());
        } else {
            log::trace!("auth scheme {} skipped: no credential", scheme.name());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credentials_contributes_nothing() {
        let out = apply(LAKEFS_AUTH, &Credentials::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_basic_auth() {
        let out = apply(LAKEFS_AUTH, &Credentials::basic("user", "pass"));
        assert_eq!(
            out.headers,
            vec![("Authorization".to_string(), "Basic dXNlcjpwYXNz".to_string())]
        );
    }

    #[test]
    fn test_first_authorization_wins() {
        let mut creds = Credentials::basic("user", "pass");
        creds.access_token = Some("tok".into());
        let out = apply(LAKEFS_AUTH, &creds);
        assert_eq!(out.headers.len(), 1);
        assert!(out.headers[0].1.starts_with("Basic "));

        let out = apply(&[JWT_TOKEN, BASIC_AUTH], &creds);
        assert_eq!(out.headers[0].1, "Bearer tok");
    }

    #[test]
    fn test_cookie_schemes_compose_with_authorization() {
        let creds = Credentials::bearer("tok")
            .with_api_key("cookie_auth", "k1")
            .with_api_key("oidc_auth", "k2");
        let out = apply(LAKEFS_AUTH, &creds);
        assert_eq!(out.headers.len(), 1);
        assert_eq!(
            out.cookies,
            vec![
                ("internal_key".to_string(), "k1".to_string()),
                ("oidc_auth_session".to_string(), "k2".to_string())
            ]
        );
    }

    #[test]
    fn test_api_key_query_and_prefix() {
        let scheme = AuthScheme::ApiKey {
            name: "api_key",
            location: ApiKeyLocation::Query,
            param_name: "token",
        };
        let creds = Credentials::default()
            .with_api_key("api_key", "abc")
            .with_api_key_prefix("api_key", "Key");
        let out = apply(&[scheme], &creds);
        assert_eq!(out.query, vec![("token".to_string(), "Key abc".to_string())]);
        assert_eq!(scheme.name(), "api_key");
    }
}
