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

//! Content negotiation
//!
//! Selection is deterministic and depends only on the operation's candidate
//! media types and the client preferences, never on the body.

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";
pub const TEXT_PLAIN: &str = "text/plain";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Strips parameters and lowercases a media type
fn essence(mime: &str) -> String {
    mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase()
}

/// True for `application/json`, `application/*+json` and
/// `application/json-patch+json` style types, with or without parameters
pub fn is_json_mime(mime: &str) -> bool {
    let e = essence(mime);
    if e == "*/*" {
        return false;
    }
    match e.split_once('/') {
        Some((_, sub)) => sub == "json" || sub.ends_with("+json"),
        None => false,
    }
}

/// True when a candidate satisfies a client preference
fn compatible(preference: &str, candidate: &str) -> bool {
    let p = essence(preference);
    let c = essence(candidate);
    if p == c || p == "*/*" {
        return true;
    }
    if let Some(ptype) = p.strip_suffix("/*") {
        return c.split('/').next() == Some(ptype);
    }
    is_json_mime(&p) && is_json_mime(&c)
}

fn select<'a>(candidates: &'a [&'a str], preferences: &[String]) -> Option<&'a str> {
    let first = candidates.first()?;
    for preference in preferences {
        if let Some(c) = candidates.iter().find(|c| compatible(preference, c)) {
            return Some(*c);
        }
    }
    Some(*first)
}

/// Picks the `Accept` header value.
///
/// Returns `None` when the operation declares no response media types, in
/// which case the header is omitted. The first candidate compatible with the
/// highest priority preference wins, falling back to the first candidate.
pub fn select_accept(candidates: &[&str], preferences: &[String]) -> Option<String> {
    select(candidates, preferences).map(str::to_string)
}

/// Picks the request `Content-Type`; `application/json` when the operation
/// declares none
pub fn select_content_type(candidates: &[&str], preferences: &[String]) -> String {
    select(candidates, preferences)
        .unwrap_or(APPLICATION_JSON)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json_mime() {
        assert!(is_json_mime("application/json"));
        assert!(is_json_mime("application/json; charset=utf-8"));
        assert!(is_json_mime("Application/JSON"));
        assert!(is_json_mime("application/vnd.lakefs+json"));
        assert!(!is_json_mime("application/octet-stream"));
        assert!(!is_json_mime("text/plain"));
        assert!(!is_json_mime("*/*"));
        assert!(!is_json_mime(""));
    }

    #[test]
    fn test_select_accept_empty_candidates() {
        assert_eq!(select_accept(&[], &["application/json".to_string()]), None);
    }

    #[test]
    fn test_select_accept_first_candidate_without_preferences() {
        let candidates = ["application/octet-stream", "application/json"];
        assert_eq!(
            select_accept(&candidates, &[]).as_deref(),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn test_select_accept_honours_preference_order() {
        let candidates = ["application/octet-stream", "application/json"];
        let prefs = vec!["application/json".to_string()];
        assert_eq!(
            select_accept(&candidates, &prefs).as_deref(),
            Some("application/json")
        );
        let prefs = vec!["text/*".to_string(), "application/*".to_string()];
        assert_eq!(
            select_accept(&candidates, &prefs).as_deref(),
            Some("application/octet-stream")
        );
        let prefs = vec!["application/problem+json".to_string()];
        assert_eq!(
            select_accept(&candidates, &prefs).as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn test_select_content_type() {
        assert_eq!(select_content_type(&[], &[]), APPLICATION_JSON);
        assert_eq!(
            select_content_type(&[MULTIPART_FORM_DATA], &[]),
            MULTIPART_FORM_DATA
        );
    }
}
