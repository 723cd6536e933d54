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

//! Various utility and helper functions

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Everything except the RFC 3986 unreserved characters.
const UNRESERVED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-escapes a path segment, query key or query value.
///
/// Only unreserved characters are left as-is, so `/`, `?`, `#`, `&` and
/// spaces never alter the structure of the URL.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, UNRESERVED_ENCODE_SET).collect()
}

/// Reverses [`url_encode`]
pub fn url_decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Formats a timestamp the way the server expects it in parameters
pub fn to_rfc3339(time: UtcTime) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Trims trailing `/` from a base path so templates can be appended
pub fn trim_base_path(base: &str) -> &str {
    base.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_url_encode_reserved() {
        assert_eq!(url_encode("a/b"), "a%2Fb");
        assert_eq!(url_encode("a b"), "a%20b");
        assert_eq!(url_encode("x?y#z&w=v"), "x%3Fy%23z%26w%3Dv");
        assert_eq!(url_encode("Az09-._~"), "Az09-._~");
        assert_eq!(url_encode("ü"), "%C3%BC");
    }

    #[test]
    fn test_rfc3339() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(to_rfc3339(t), "2024-03-01T12:30:00Z");
    }

    #[test]
    fn test_trim_base_path() {
        assert_eq!(
            trim_base_path("http://localhost/api/v1/"),
            "http://localhost/api/v1"
        );
        assert_eq!(trim_base_path("http://h"), "http://h");
    }

    quickcheck! {
        fn prop_url_encode_roundtrip(s: String) -> bool {
            url_decode(&url_encode(&s)) == s
        }

        fn prop_url_encode_is_single_segment(s: String) -> bool {
            let encoded = url_encode(&s);
            !encoded.contains('/') && !encoded.contains('?') && !encoded.contains(' ')
        }
    }
}
