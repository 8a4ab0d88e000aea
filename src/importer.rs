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

//! The snippet bulk importer itself.

use crate::fixture::{SnippetFields, SnippetRecord, SNIPPET_MODEL};
use crate::l10n::{self, Translations};
use crate::rules::{self, ClientMatchRule};
use anyhow::Context as _;
use log::warn;
use std::collections::HashMap;
use tera::Tera;

/// Markup rendered into every snippet body. The localized text and
/// the icon data URI are trusted fragments; everything else is
/// escaped by the template engine.
const SNIPPET_TEMPLATE: &str = include_str!("../templates/snippet.html");

/// Renders one snippet fixture per locale of a localized campaign.
///
/// All inputs are loaded up front: the campaign name and link, the
/// base64-encoded icon, the fetched localized strings, and the locale
/// → rule id map scanned from the client match rule dump. Rendering
/// is a single pass over the locales with per-locale skip semantics.
pub struct Importer {
    name: String,
    link: String,
    icon_uri: String,
    translations: Translations,
    locale_rules: HashMap<String, i64>,
    extra_rules: Vec<i64>,
    tera: Tera,
}

impl Importer {
    pub fn new(
        name: String,
        client_match_rules: &[ClientMatchRule],
        icon_uri: String,
        translations: Translations,
        link: String,
        locale_pattern: &str,
        extra_rules: Vec<i64>,
    ) -> anyhow::Result<Self> {
        let locale_rules = rules::locale_rules(client_match_rules, locale_pattern)?;
        let mut tera = Tera::default();
        tera.add_raw_template("snippet.html", SNIPPET_TEMPLATE)
            .context("Could not compile the snippet template")?;
        Ok(Importer {
            name,
            link,
            icon_uri,
            translations,
            locale_rules,
            extra_rules,
            tera,
        })
    }

    /// Renders the snippet body for one locale.
    ///
    /// Fails when the locale has no localized string or when the
    /// string does not substitute cleanly.
    pub fn snippet_body(&self, locale: &str) -> anyhow::Result<String> {
        let template = self
            .translations
            .get(locale)
            .with_context(|| format!("No localized string for locale <{locale}>"))?;
        let text = l10n::substitute(template, &self.link)?;

        let mut context = tera::Context::new();
        context.insert("image_url", "");
        context.insert("image_b64", &self.icon_uri);
        context.insert("text", &text);
        self.tera
            .render("snippet.html", &context)
            .context("Could not render the snippet template")
    }

    /// Renders the full fixture record for one locale.
    ///
    /// Returns `None` and logs a diagnostic when the locale has no
    /// client match rule or its string cannot be substituted; such
    /// locales are dropped without failing the batch.
    pub fn snippet_record(&self, locale: &str) -> Option<SnippetRecord> {
        let Some(&rule_id) = self.locale_rules.get(locale) else {
            warn!("No client match rule found for locale <{locale}>, skipping");
            return None;
        };

        let body = match self.snippet_body(locale) {
            Ok(body) => body,
            Err(err) => {
                warn!("Error in locale <{locale}>, skipping: {err}");
                return None;
            }
        };

        let mut client_match_rules = vec![rule_id];
        client_match_rules.extend_from_slice(&self.extra_rules);
        Some(SnippetRecord {
            pk: None,
            model: SNIPPET_MODEL,
            fields: SnippetFields {
                body,
                disabled: true,
                name: format!("{} {locale}", self.name),
                priority: 0,
                pub_start: None,
                pub_end: None,
                preview: false,
                client_match_rules,
            },
        })
    }

    /// Renders records for every locale in the localized strings, in
    /// payload order. An empty result just means every locale was
    /// skipped.
    pub fn all_snippet_records(&self) -> Vec<SnippetRecord> {
        self.translations
            .locales()
            .filter_map(|locale| self.snippet_record(locale))
            .collect()
    }
}
