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

//! Output record types for the snippets fixture format.

use serde::Serialize;

/// Record type understood by the snippets service fixture loader.
pub const SNIPPET_MODEL: &str = "homesnippets.snippet";

/// A single snippet fixture, shaped for direct bulk load.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SnippetRecord {
    /// Always `null`; the ingesting system assigns the primary key.
    pub pk: Option<i64>,
    pub model: &'static str,
    pub fields: SnippetFields,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SnippetFields {
    pub body: String,
    /// Imported snippets start disabled and require manual review.
    pub disabled: bool,
    pub name: String,
    pub priority: i64,
    pub pub_start: Option<String>,
    pub pub_end: Option<String>,
    pub preview: bool,
    /// The locale's own rule id first, then any extra rule ids.
    pub client_match_rules: Vec<i64>,
}
