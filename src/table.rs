/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::config::{Config, MalformedPolicy};
use crate::error::{Error, Result};
use crate::messages::{SOURCE_COMMENT_PREFIX, STRICT_MODE, TABLE_CLOSE, TABLE_OPEN};
use crate::record::Record;
use crate::unicode::{escape_name, Entry};

/// Counts from one generator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub entries: usize,
    /// Control characters written under their alternate name.
    pub substituted: usize,
    /// Malformed lines dropped under `MalformedPolicy::Skip`.
    pub skipped: usize,
}

/// Writes the table wrapper and its entries as they arrive.
pub struct TableWriter<W: Write> {
    out: W,
    escape_names: bool,
}

impl<W: Write> TableWriter<W> {
    /// Writes the header lines and the opening of the table.
    pub fn begin(mut out: W, config: &Config) -> io::Result<TableWriter<W>> {
        write!(out, "{}{}\n{}\n\n{}\n",
               SOURCE_COMMENT_PREFIX, config.source_url, STRICT_MODE, TABLE_OPEN)?;

        Ok(TableWriter {
            out,
            escape_names: config.escape_names,
        })
    }

    pub fn entry(&mut self, entry: &Entry<'_>) -> io::Result<()> {
        if self.escape_names {
            writeln!(self.out, "0x{}: \"{}\",", entry.codepoint, escape_name(entry.display_name))
        } else {
            writeln!(self.out, "0x{}: \"{}\",", entry.codepoint, entry.display_name)
        }
    }

    /// Closes the table and hands back the writer, flushed.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "{}", TABLE_CLOSE)?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Reads `UnicodeData.txt` lines from `input` and streams the table into
/// `out`, one entry per line in input order.
///
/// Under the default abort policy a malformed line stops generation with
/// whatever was already written left in `out`.
pub fn generate<R: BufRead, W: Write>(input: R, out: W, config: &Config) -> Result<Summary> {
    let mut table = TableWriter::begin(out, config)?;
    let mut summary = Summary::default();

    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        let record = match Record::parse(line, i + 1) {
            Ok(record) => record,
            Err(e @ Error::MalformedRecord { .. }) if config.on_malformed == MalformedPolicy::Skip => {
                warn!("skipping {}", e);
                summary.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let entry = Entry::from(&record);
        if entry.is_substituted(&record) {
            debug!("0x{}: {} -> {}", entry.codepoint, record.name(), entry.display_name);
            summary.substituted += 1;
        }

        table.entry(&entry)?;
        summary.entries += 1;
    }

    table.finish()?;
    Ok(summary)
}

/// `generate` over an in-memory file, returning the table text.
pub fn generate_string(input: &str, config: &Config) -> Result<String> {
    let mut out = Vec::new();
    generate(input.as_bytes(), &mut out, config)?;
    String::from_utf8(out).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
