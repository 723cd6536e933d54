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

//! Path and parameter encoding

use crate::api::error::{Error, ValidationErr};
use crate::api::types::{CollectionFormat, ParamValue};
use crate::api::utils::url_encode;

/// Substitutes every `{name}` placeholder of `template`.
///
/// Values are percent-escaped so they always occupy exactly one path
/// segment. A placeholder without a value fails with
/// [`Error::MissingParameter`].
pub fn expand_path<'a, F>(
    template: &'static str,
    operation: &'static str,
    mut lookup: F,
) -> Result<String, Error>
where
    F: FnMut(&str) -> Option<&'a ParamValue>,
{
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or(ValidationErr::InvalidPathTemplate {
            template,
            reason: "unterminated placeholder",
        })?;
        let name_start = template.len() - after.len();
        let name: &'static str = &template[name_start..name_start + end];
        if name.is_empty() {
            return Err(ValidationErr::InvalidPathTemplate {
                template,
                reason: "empty placeholder",
            }
            .into());
        }
        let value = lookup(name).ok_or(Error::MissingParameter {
            operation,
            parameter: name,
        })?;
        out.push_str(&url_encode(&value.joined()));
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Lists the placeholder names of a path template in order
pub fn path_placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                names.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    names
}

/// Renders a query parameter as `(name, escaped value)` pairs.
///
/// [`CollectionFormat::Multi`] yields one pair per element. Joined formats
/// escape each element and join them with the escaped delimiter, so `,`
/// appears literally while space, tab and `|` are escaped.
pub fn query_pairs(name: &str, value: &ParamValue, format: CollectionFormat) -> Vec<(String, String)> {
    match (value, format.delimiter()) {
        (ParamValue::Single(v), _) => vec![(name.to_string(), url_encode(v))],
        (ParamValue::Multiple(v), None) => v
            .iter()
            .map(|e| (name.to_string(), url_encode(e)))
            .collect(),
        (ParamValue::Multiple(v), Some(delim)) => {
            let delim = escape_delimiter(delim);
            let joined = v
                .iter()
                .map(|e| url_encode(e))
                .collect::<Vec<_>>()
                .join(delim);
            vec![(name.to_string(), joined)]
        }
    }
}

fn escape_delimiter(delim: &'static str) -> &'static str {
    match delim {
        " " => "%20",
        "\t" => "%09",
        "|" => "%7C",
        other => other,
    }
}

/// Renders a header or cookie value.
///
/// Values are not escaped. [`CollectionFormat::Multi`] yields one value per
/// element; joined formats yield a single value with the raw delimiter.
pub fn header_values(value: &ParamValue, format: CollectionFormat) -> Vec<String> {
    match (value, format.delimiter()) {
        (ParamValue::Single(v), _) => vec![v.clone()],
        (ParamValue::Multiple(v), None) => v.clone(),
        (ParamValue::Multiple(v), Some(delim)) => vec![v.join(delim)],
    }
}

/// Renders a form field as `(name, value)` pairs, unescaped
pub fn form_pairs(name: &str, value: &ParamValue, format: CollectionFormat) -> Vec<(String, String)> {
    header_values(value, format)
        .into_iter()
        .map(|v| (name.to_string(), v))
        .collect()
}

/// Joins cookie pairs into one `Cookie` header value
pub fn cookie_header(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::utils::url_decode;
    use std::collections::HashMap;

    const RUN_PATH: &str = "/repositories/{repository}/actions/runs/{run_id}";

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, ParamValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), ParamValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_expand_path_escapes_values() {
        let v = values(&[("repository", "my repo/x"), ("run_id", "a?b")]);
        let path = expand_path(RUN_PATH, "getRun", |n| v.get(n)).unwrap();
        assert_eq!(path, "/repositories/my%20repo%2Fx/actions/runs/a%3Fb");
    }

    #[test]
    fn test_expand_path_missing_parameter() {
        let v = values(&[("repository", "repo")]);
        let err = expand_path(RUN_PATH, "getRun", |n| v.get(n)).unwrap_err();
        match err {
            Error::MissingParameter {
                operation,
                parameter,
            } => {
                assert_eq!(operation, "getRun");
                assert_eq!(parameter, "run_id");
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn test_expand_path_unterminated() {
        let v = values(&[]);
        let err = expand_path("/a/{b", "op", |n| v.get(n)).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationErr::InvalidPathTemplate { .. })
        ));
    }

    #[test]
    fn test_path_placeholders() {
        assert_eq!(path_placeholders(RUN_PATH), vec!["repository", "run_id"]);
        assert!(path_placeholders("/healthcheck").is_empty());
    }

    #[test]
    fn test_query_pairs_formats() {
        let v = ParamValue::from(vec!["a b", "c"]);
        assert_eq!(
            query_pairs("x", &v, CollectionFormat::Csv),
            vec![("x".to_string(), "a%20b,c".to_string())]
        );
        assert_eq!(
            query_pairs("x", &v, CollectionFormat::Ssv)[0].1,
            "a%20b%20c"
        );
        assert_eq!(query_pairs("x", &v, CollectionFormat::Tsv)[0].1, "a%20b%09c");
        assert_eq!(query_pairs("x", &v, CollectionFormat::Pipes)[0].1, "a%20b%7Cc");
        assert_eq!(
            query_pairs("x", &v, CollectionFormat::Multi),
            vec![
                ("x".to_string(), "a%20b".to_string()),
                ("x".to_string(), "c".to_string())
            ]
        );
        assert_eq!(
            query_pairs("after", &ParamValue::from("k,1"), CollectionFormat::Csv)[0].1,
            "k%2C1"
        );
    }

    #[test]
    fn test_header_values_formats() {
        let v = ParamValue::from(vec!["a", "b"]);
        assert_eq!(header_values(&v, CollectionFormat::Csv), vec!["a,b"]);
        assert_eq!(header_values(&v, CollectionFormat::Pipes), vec!["a|b"]);
        assert_eq!(header_values(&v, CollectionFormat::Multi), vec!["a", "b"]);
        assert_eq!(
            cookie_header(&[("a".into(), "1".into()), ("b".into(), "2".into())]),
            "a=1; b=2"
        );
    }

    quickcheck! {
        fn prop_expand_path_single_segment(repo: String, run: String) -> bool {
            let v: HashMap<String, ParamValue> = [
                ("repository".to_string(), ParamValue::from(repo.clone())),
                ("run_id".to_string(), ParamValue::from(run.clone())),
            ]
            .into_iter()
            .collect();
            let path = match expand_path(RUN_PATH, "getRun", |n| v.get(n)) {
                Ok(p) => p,
                Err(_) => return false,
            };
            let segments: Vec<&str> = path.split('/').collect();
            segments.len() == 6
                && url_decode(segments[2]) == repo
                && url_decode(segments[5]) == run
        }
    }
}
