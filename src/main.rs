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

//! Bulk-import utility for the snippets service.
//!
//! Fetches localized strings, pairs each locale with the id of its
//! client match rule, renders a snippet per locale, and prints the
//! fixtures as a JSON array on stdout. Diagnostics go to stderr.

use clap::Parser;
use log::info;
use snippet_bulk_import::importer::Importer;
use snippet_bulk_import::{icon, l10n, rules};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Args {
    /// Display name for the snippet.
    name: String,
    /// Path to a JSON dump of client match rules from the server to
    /// import into.
    client_match_rules: PathBuf,
    /// Path to the image to use as the snippet icon.
    image: PathBuf,
    /// URL to JSON of localized strings.
    l10n_url: String,
    /// Link to use in the snippet.
    link: String,
    /// Extra client match rule ids to attach to every snippet.
    #[arg(long, value_name = "RULE_ID", num_args = 1..)]
    extra_rules: Vec<i64>,
    /// Pattern extracting a locale tag from a rule description.
    #[arg(long, default_value = rules::DEFAULT_LOCALE_PATTERN)]
    locale_pattern: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));
    let args = Args::parse();

    let client_match_rules = rules::load_rules(&args.client_match_rules)?;
    let icon_uri = icon::data_uri(&args.image)?;
    let translations = l10n::fetch_strings(&args.l10n_url)?;
    let importer = Importer::new(
        args.name,
        &client_match_rules,
        icon_uri,
        translations,
        args.link,
        &args.locale_pattern,
        args.extra_rules,
    )?;

    let fixtures = importer.all_snippet_records();
    info!("Rendered {} snippet fixtures", fixtures.len());
    serde_json::to_writer(io::stdout(), &fixtures)?;

    Ok(())
}
