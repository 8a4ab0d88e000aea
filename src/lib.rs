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

//! Bulk importer for localized snippet fixtures.
//!
//! A snippet is a short piece of promotional content shown to clients
//! matching a server-side client match rule. Given a display name, a
//! dump of client match rules (whose descriptions carry locale tags),
//! an icon image, a URL of localized strings and a link, this crate
//! renders one snippet fixture per locale, pairing the locale's text
//! with the id of its client match rule. The resulting JSON array can
//! be bulk-loaded directly into the snippets service.
//!
//! Locales without a matching rule, or whose localized string cannot
//! be substituted into, are skipped with a diagnostic; they never fail
//! the batch.

pub mod fixture;
pub mod icon;
pub mod importer;
pub mod l10n;
pub mod rules;
