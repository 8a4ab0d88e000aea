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

//! Localized snippet strings and link substitution.
//!
//! The strings come from a JSON object fetched over HTTP. Only the
//! first value of that object is read; it must itself be an object
//! mapping locale codes to printf-style templates with a single `%s`
//! placeholder for the snippet link.

use anyhow::{bail, Context};
use serde_json::Value;

/// Localized snippet texts keyed by locale, in payload order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Translations(Vec<(String, String)>);

impl Translations {
    /// Validates the fetched localization payload.
    ///
    /// The payload must be a non-empty JSON object whose first value
    /// is an object from locale code to template string. Everything
    /// past the first value is ignored.
    pub fn from_payload(payload: &Value) -> anyhow::Result<Self> {
        let payload = payload
            .as_object()
            .context("Localization payload is not a JSON object")?;
        let (name, strings) = payload
            .iter()
            .next()
            .context("Localization payload is empty")?;
        let strings = strings
            .as_object()
            .with_context(|| format!("Localized strings under {name:?} are not a JSON object"))?;

        let mut translations = Vec::with_capacity(strings.len());
        for (locale, text) in strings {
            let text = text
                .as_str()
                .with_context(|| format!("Localized string for locale <{locale}> is not a string"))?;
            translations.push((locale.clone(), String::from(text)));
        }
        Ok(Translations(translations))
    }

    /// Looks up the template string for a locale.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(code, _)| code == locale)
            .map(|(_, text)| text.as_str())
    }

    /// Iterates the locale codes in payload order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(code, _)| code.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fetches the localized strings for the campaign.
pub fn fetch_strings(url: &str) -> anyhow::Result<Translations> {
    let payload: Value = reqwest::blocking::get(url)
        .with_context(|| format!("Could not fetch localized strings from {url}"))?
        .error_for_status()
        .with_context(|| format!("Request for localized strings at {url} failed"))?
        .json()
        .with_context(|| format!("Localization payload at {url} is not valid JSON"))?;
    Translations::from_payload(&payload)
}

/// Substitutes `link` for the single `%s` placeholder in `template`.
///
/// The localized strings use printf-style markers: `%s` is the
/// substitution site and `%%` a literal percent sign. A template must
/// contain exactly one `%s`; anything else is an error, reported per
/// locale by the caller.
pub fn substitute(template: &str, link: &str) -> anyhow::Result<String> {
    let mut substituted = String::with_capacity(template.len() + link.len());
    let mut placeholders = 0;
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            substituted.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => {
                substituted.push_str(link);
                placeholders += 1;
            }
            Some('%') => substituted.push('%'),
            Some(directive) => bail!("unsupported format directive %{directive}"),
            None => bail!("dangling % at end of string"),
        }
    }
    match placeholders {
        1 => Ok(substituted),
        0 => bail!("no %s placeholder in string"),
        n => bail!("expected a single %s placeholder, found {n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_substitute() {
        assert_eq!(
            substitute("Try %s today!", "http://x").unwrap(),
            "Try http://x today!"
        );
    }

    #[test]
    fn test_substitute_literal_percent() {
        assert_eq!(
            substitute("100%% free at %s", "http://x").unwrap(),
            "100% free at http://x"
        );
    }

    #[test]
    fn test_substitute_rejects_missing_placeholder() {
        assert!(substitute("No placeholder here", "http://x").is_err());
    }

    #[test]
    fn test_substitute_rejects_multiple_placeholders() {
        assert!(substitute("Hello %s %s", "http://x").is_err());
    }

    #[test]
    fn test_substitute_rejects_unknown_directive() {
        assert!(substitute("Version %d of %s", "http://x").is_err());
    }

    #[test]
    fn test_substitute_rejects_dangling_percent() {
        assert!(substitute("Get %s now: 50%", "http://x").is_err());
    }

    #[test]
    fn test_from_payload() {
        let payload = json!({"strings": {"en-US": "Hello %s", "de": "Hallo %s"}});
        let translations = Translations::from_payload(&payload).unwrap();
        assert_eq!(translations.get("en-US"), Some("Hello %s"));
        assert_eq!(translations.get("de"), Some("Hallo %s"));
        assert_eq!(translations.get("fr"), None);
        assert_eq!(translations.locales().collect::<Vec<_>>(), ["en-US", "de"]);
    }

    #[test]
    fn test_from_payload_reads_only_the_first_value() {
        // serde_json is configured to preserve document order, so the
        // first value is the first one in the payload, not the first
        // key alphabetically.
        let payload = json!({
            "zz-strings": {"en-US": "Hello %s"},
            "aa-extra": "not an object",
        });
        let translations = Translations::from_payload(&payload).unwrap();
        assert_eq!(translations.locales().collect::<Vec<_>>(), ["en-US"]);
    }

    #[test]
    fn test_from_payload_rejects_non_object_payload() {
        assert!(Translations::from_payload(&json!(["en-US"])).is_err());
    }

    #[test]
    fn test_from_payload_rejects_empty_payload() {
        assert!(Translations::from_payload(&json!({})).is_err());
    }

    #[test]
    fn test_from_payload_rejects_non_object_first_value() {
        assert!(Translations::from_payload(&json!({"strings": "en-US"})).is_err());
    }

    #[test]
    fn test_from_payload_rejects_non_string_template() {
        let payload = json!({"strings": {"en-US": {"text": "Hello %s"}}});
        assert!(Translations::from_payload(&payload).is_err());
    }
}
