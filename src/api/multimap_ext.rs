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

use crate::api::utils::url_encode;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Replaces all values of `key` with a single value. Keys are compared
    /// case-insensitively, as header names are.
    fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Case-insensitive lookup, used for header names
    fn contains_key_ignore_case(&self, key: &str) -> bool;

    /// Converts multimap to HTTP query string.
    ///
    /// Keys are escaped here; values are expected to be escaped already,
    /// since joined collection formats carry escaped delimiters.
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let matching: Vec<String> = self
            .keys()
            .filter(|k| k.eq_ignore_ascii_case(&key))
            .cloned()
            .collect();
        for k in matching {
            self.remove(&k);
        }
        self.insert(key, value.into());
    }

    fn contains_key_ignore_case(&self, key: &str) -> bool {
        self.keys().any(|k| k.eq_ignore_ascii_case(key))
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(value);
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_string_keeps_order_per_key() {
        let mut m = Multimap::new();
        m.add("amount", "10");
        m.add("tag", "a");
        m.add("tag", "b");
        let q = m.to_query_string();
        assert!(q.contains("amount=10"));
        assert!(q.contains("tag=a&tag=b"));
    }

    #[test]
    fn test_set_replaces() {
        let mut m = Multimap::new();
        m.add("User-Agent", "a");
        m.add("User-Agent", "b");
        m.set("User-Agent", "c");
        assert_eq!(m.get_vec("User-Agent").unwrap(), &vec!["c".to_string()]);
        assert!(m.contains_key_ignore_case("user-agent"));
    }

    #[test]
    fn test_set_replaces_other_casings() {
        let mut m = Multimap::new();
        m.add("authorization", "Token mine");
        m.add("AUTHORIZATION", "Token other");
        m.add("Accept", "text/plain");
        m.set("Authorization", "Basic YTpi");
        assert_eq!(m.len(), 2);
        assert!(m.get("authorization").is_none());
        assert!(m.get("AUTHORIZATION").is_none());
        assert_eq!(m.get_vec("Authorization").unwrap(), &vec!["Basic YTpi".to_string()]);
    }

    #[test]
    fn test_add_multimap() {
        let mut a = Multimap::new();
        a.add("x", "1");
        let mut b = Multimap::new();
        b.add("x", "2");
        b.add("y", "3");
        a.add_multimap(b);
        assert_eq!(a.get_vec("x").unwrap().len(), 2);
        assert_eq!(a.get("y").unwrap(), "3");
    }
}
