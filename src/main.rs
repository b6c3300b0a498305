/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use log::info;
use quicli::prelude::{CliResult, Verbosity};
use structopt::StructOpt;

use unicode_table::messages::{ABOUT_MESSAGE, DEFAULT_INPUT};
use unicode_table::{generate, Config, MalformedPolicy, Summary};

#[derive(Debug, StructOpt)]
#[structopt(name = "unicode_table", raw(about = "ABOUT_MESSAGE"))]
struct Cli {
    /// UnicodeData.txt to read
    #[structopt(parse(from_os_str), raw(default_value = "DEFAULT_INPUT"))]
    input: PathBuf,

    /// Write the table here instead of stdout
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,

    /// TOML file with source_url, escape_names and on_malformed
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,

    /// Warn about lines with too few fields instead of aborting
    #[structopt(long = "skip-malformed")]
    skip_malformed: bool,

    /// Write names exactly as they appear, without escaping quotes or backslashes
    #[structopt(long = "raw-names")]
    raw_names: bool,

    /// URL for the header comment
    #[structopt(long = "source-url")]
    source_url: Option<String>,

    #[structopt(flatten)]
    verbosity: Verbosity,
}

impl Cli {
    /// The config file, if any, with command line flags on top.
    fn config(&self) -> unicode_table::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        };

        if self.skip_malformed {
            config.on_malformed = MalformedPolicy::Skip;
        }
        if self.raw_names {
            config.escape_names = false;
        }
        if let Some(ref url) = self.source_url {
            config.source_url = url.clone();
        }

        Ok(config)
    }
}

fn open(path: &Path) -> io::Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
}

/// `names.js` becomes `names.js.tmp`, so no sibling with another extension
/// is touched.
fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Generates into `<path>.tmp` and renames it over `path` once the whole
/// table is written.
fn generate_file(input: BufReader<File>, path: &Path, config: &Config) -> unicode_table::Result<Summary> {
    let tmp = tmp_path(path);
    let out = BufWriter::new(File::create(&tmp)?);

    match generate(input, out, config) {
        Ok(summary) => {
            fs::rename(&tmp, path)?;
            Ok(summary)
        }
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

fn main() -> CliResult {
    let args = Cli::from_args();
    args.verbosity.setup_env_logger(env!("CARGO_PKG_NAME"))?;

    let config = args.config()?;

    info!("reading {}", args.input.display());
    let input = open(&args.input)?;

    let summary = match args.output {
        Some(ref path) => generate_file(input, path, &config)?,
        None => {
            let stdout = io::stdout();
            let out = BufWriter::new(stdout.lock());
            generate(input, out, &config)?
        }
    };

    info!("{} entries written, {} control names substituted, {} malformed lines skipped",
          summary.entries, summary.substituted, summary.skipped);

    Ok(())
}
