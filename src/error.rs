/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::record::MIN_FIELDS;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record on line {line}: expected at least {} fields, found {found}", MIN_FIELDS)]
    MalformedRecord { line: usize, found: usize },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
