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

//! Snippet icon encoding.

use anyhow::{bail, Context};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Reads an image file and encodes it as a `data:` URI.
///
/// Only the image types the snippets service accepts are supported;
/// any other extension is an error.
pub fn data_uri(path: &Path) -> anyhow::Result<String> {
    let mimetype = match path.extension().and_then(OsStr::to_str) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => bail!("Unsupported image type for {path:?}: expected png, jpg or jpeg"),
    };
    let data = fs::read(path).with_context(|| format!("Could not read image from {path:?}"))?;
    Ok(format!("data:{mimetype};base64,{}", BASE64.encode(data)))
}
