// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client match rules and the locale → rule id map derived from them.

use anyhow::{bail, Context};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Pattern used to extract a locale tag from a rule description.
///
/// Anchored so that only descriptions starting with the tag count.
pub const DEFAULT_LOCALE_PATTERN: &str = "^Locale: ([A-Za-z-]+)";

/// A client match rule as dumped by the snippets server.
///
/// Other fields of the dump are ignored; only the id and the
/// description carrying the locale tag matter here.
#[derive(Clone, Debug, Deserialize)]
pub struct ClientMatchRule {
    pub pk: i64,
    pub fields: RuleFields,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuleFields {
    pub description: String,
}

/// Reads a JSON dump of client match rules.
pub fn load_rules(path: &Path) -> anyhow::Result<Vec<ClientMatchRule>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Could not read client match rules from {path:?}"))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Could not parse {path:?} as a list of client match rules"))
}

/// Maps each locale tag found in a rule description to the rule's id.
///
/// Rules whose description does not match `pattern` contribute
/// nothing. When several rules carry the same locale tag, the last
/// one wins.
pub fn locale_rules(
    rules: &[ClientMatchRule],
    pattern: &str,
) -> anyhow::Result<HashMap<String, i64>> {
    let locale_re =
        Regex::new(pattern).with_context(|| format!("Invalid locale pattern {pattern:?}"))?;
    if locale_re.captures_len() < 2 {
        bail!("Locale pattern {pattern:?} has no capture group for the locale tag");
    }

    let mut map = HashMap::new();
    for rule in rules {
        if let Some(locale) = locale_re
            .captures(&rule.fields.description)
            .and_then(|captures| captures.get(1))
        {
            map.insert(locale.as_str().to_string(), rule.pk);
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn rule(pk: i64, description: &str) -> ClientMatchRule {
        ClientMatchRule {
            pk,
            fields: RuleFields {
                description: String::from(description),
            },
        }
    }

    #[test]
    fn test_locale_extraction() {
        let map = locale_rules(&[rule(5, "Locale: fr-CA")], DEFAULT_LOCALE_PATTERN).unwrap();
        assert_eq!(map, HashMap::from([(String::from("fr-CA"), 5)]));
    }

    #[test]
    fn test_non_matching_descriptions_are_ignored() {
        let rules = [
            rule(1, "Locale: en-US"),
            rule(2, "All Google Analytics users"),
            rule(3, "locale: de"),
        ];
        let map = locale_rules(&rules, DEFAULT_LOCALE_PATTERN).unwrap();
        assert_eq!(map, HashMap::from([(String::from("en-US"), 1)]));
    }

    #[test]
    fn test_tag_must_start_the_description() {
        let rules = [rule(7, "Germany, Locale: de")];
        let map = locale_rules(&rules, DEFAULT_LOCALE_PATTERN).unwrap();
        assert_eq!(map, HashMap::new());
    }

    #[test]
    fn test_last_rule_wins_on_duplicate_locales() {
        let rules = [rule(1, "Locale: en-US"), rule(9, "Locale: en-US")];
        let map = locale_rules(&rules, DEFAULT_LOCALE_PATTERN).unwrap();
        assert_eq!(map, HashMap::from([(String::from("en-US"), 9)]));
    }

    #[test]
    fn test_pattern_without_capture_group_is_rejected() {
        assert!(locale_rules(&[], "^Locale: [A-Za-z-]+").is_err());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert!(locale_rules(&[], "Locale: ([A-Za-z-]+").is_err());
    }

    #[test]
    fn test_load_rules() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"pk": 5, "model": "homesnippets.clientmatchrule",
                 "fields": {"description": "Locale: en-US", "startpage_version": ""}}]"#,
        )
        .unwrap();

        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].pk, 5);
        assert_eq!(rules[0].fields.description, "Locale: en-US");
    }

    #[test]
    fn test_load_rules_rejects_malformed_dump() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"pk": 5}"#).unwrap();
        assert!(load_rules(file.path()).is_err());
    }
}
