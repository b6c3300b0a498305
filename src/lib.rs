/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Turns `UnicodeData.txt` into a code point to name table.
//!
//! ```
//! use unicode_table::{generate_string, Config};
//!
//! let table = generate_string("0000;<control>;Cc;0;BN;;;;;N;NULL;;;;\n", &Config::default()).unwrap();
//! assert!(table.contains("0x0000: \"NULL\",\n"));
//! ```

pub mod config;
pub mod error;
pub mod messages;
pub mod record;
pub mod table;
pub mod unicode;

pub use crate::config::{Config, MalformedPolicy};
pub use crate::error::{Error, Result};
pub use crate::record::Record;
pub use crate::table::{generate, generate_string, Summary, TableWriter};
pub use crate::unicode::{display_name, escape_name, Entry};
