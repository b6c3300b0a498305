/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! A single line of `UnicodeData.txt`.

use crate::error::{Error, Result};

pub const DELIMITER: char = ';';

/// Index of the Unicode 1.0 name, the last field we read.
const ALT_NAME_FIELD: usize = 10;

/// Fewest fields a line may have and still reach the alternate name.
pub const MIN_FIELDS: usize = ALT_NAME_FIELD + 1;

/// The fields of a `UnicodeData.txt` line that the table needs, borrowed from
/// the line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    codepoint: &'a str,
    name: &'a str,
    alt_name: &'a str,
}

impl<'a> Record<'a> {
    /// Splits `line` on `;`. `line_no` is 1-based and only used for the error.
    pub fn parse(line: &'a str, line_no: usize) -> Result<Record<'a>> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() < MIN_FIELDS {
            return Err(Error::MalformedRecord {
                line: line_no,
                found: fields.len(),
            });
        }

        Ok(Record {
            codepoint: fields[0],
            name: fields[1],
            alt_name: fields[ALT_NAME_FIELD],
        })
    }

    /// Hex digits as written in the file, without a `0x` prefix.
    pub fn codepoint(&self) -> &'a str {
        self.codepoint
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn alt_name(&self) -> &'a str {
        self.alt_name
    }
}
