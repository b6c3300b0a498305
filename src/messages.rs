/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

pub const DEFAULT_SOURCE_URL: &str = "http://www.unicode.org/Public/9.0.0/ucd/UnicodeData.txt";

pub const DEFAULT_INPUT: &str = "UnicodeData.txt";

pub const SOURCE_COMMENT_PREFIX: &str = "// Adapted from ";

pub const STRICT_MODE: &str = "\"use strict\";";

pub const TABLE_OPEN: &str = "module.exports = {";

pub const TABLE_CLOSE: &str = "};";

pub const ABOUT_MESSAGE: &str = "Generate a code point to character name table from UnicodeData.txt.

Each line of the input becomes one `0x<code point>: \"<name>\",` entry. Control \
characters are listed under their Unicode 1.0 name when the database has one.";
