/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fs;
use std::path::Path;

use serde_derive::Deserialize;

use crate::error::Result;
use crate::messages::DEFAULT_SOURCE_URL;

/// What to do with a line that has too few fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    Abort,
    Skip,
}

impl Default for MalformedPolicy {
    fn default() -> Self {
        MalformedPolicy::Abort
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Written into the header comment.
    pub source_url: String,
    /// Off reproduces the old unescaped output.
    pub escape_names: bool,
    pub on_malformed: MalformedPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            escape_names: true,
            on_malformed: MalformedPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Config> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let text = fs::read_to_string(path)?;
        Config::from_toml(&text)
    }
}
